// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Deserialize;
use std::sync::Arc;
use tarif_domain::{FeePeriod, FeePeriodDraft};
use tarif_persistence::{FeeStore, PersistenceError};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Tarif Server - HTTP host for the Tarif fee service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the fee store wrapped in a Mutex to allow safe concurrent
/// access.
#[derive(Clone)]
struct AppState {
    /// The authoritative fee period store.
    store: Arc<Mutex<FeeStore>>,
}

/// Query parameters for the range lookup endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupQuery {
    /// Start of the probed range (RFC 3339).
    date_start: DateTime<Utc>,
    /// End of the probed range (RFC 3339).
    date_end: DateTime<Utc>,
}

/// A store failure crossing the HTTP boundary.
///
/// Conflicts and validation failures map to client errors; everything else
/// is a server fault.
struct HttpError(PersistenceError);

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status: StatusCode = match &self.0 {
            PersistenceError::RangeConflict { .. } => StatusCode::CONFLICT,
            PersistenceError::InvalidPeriod(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PersistenceError::PeriodNotFound(_) => StatusCode::NOT_FOUND,
            PersistenceError::DatabaseError(_)
            | PersistenceError::DatabaseConnectionFailed(_)
            | PersistenceError::MigrationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}

/// Lists all stored fee periods.
async fn list_fee_periods(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Vec<FeePeriod>>, HttpError> {
    let store = state.store.lock().await;
    Ok(Json(store.list()?))
}

/// Stores a new fee period, rejecting overlapping ranges with 409.
async fn create_fee_period(
    AxumState(state): AxumState<AppState>,
    Json(draft): Json<FeePeriodDraft>,
) -> Result<(StatusCode, Json<FeePeriod>), HttpError> {
    let mut store = state.store.lock().await;
    let period: FeePeriod = store.create(&draft)?;
    Ok((StatusCode::CREATED, Json(period)))
}

/// Deletes a stored fee period. Deleting a missing id succeeds.
async fn delete_fee_period(
    AxumState(state): AxumState<AppState>,
    Path(period_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    let mut store = state.store.lock().await;
    store.delete(period_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the first stored period covering either probed instant.
async fn lookup_fee_period(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Option<FeePeriod>>, HttpError> {
    let store = state.store.lock().await;
    Ok(Json(store.find_in_range(query.date_start, query.date_end)?))
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fees", get(list_fee_periods).post(create_fee_period))
        .route("/fees/lookup", get(lookup_fee_period))
        .route("/fees/{id}", delete(delete_fee_period))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Tarif fee server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: FeeStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        FeeStore::open(db_path)?
    } else {
        info!("Using in-memory database");
        FeeStore::open_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
