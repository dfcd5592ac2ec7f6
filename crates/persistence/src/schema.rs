// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use rusqlite::Connection;
use tracing::info;

/// Initializes the database schema.
///
/// Idempotent: safe to run on every open.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS fee_periods (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            base_fee REAL NOT NULL,
            price_per_unit REAL NOT NULL,
            monthly_discount REAL NOT NULL,
            date_start DATETIME NOT NULL,
            date_end DATETIME NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_fee_periods_range
            ON fee_periods(date_start, date_end);
        ",
    )
    .map_err(|err| PersistenceError::MigrationFailed(err.to_string()))?;

    Ok(())
}
