// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tarif_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// The submitted period violates a domain rule.
    InvalidPeriod(DomainError),
    /// The requested range collides with a stored period.
    RangeConflict {
        /// The stored period the requested range collides with.
        period_id: Option<i64>,
    },
    /// The requested period was not found.
    PeriodNotFound(i64),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::InvalidPeriod(err) => write!(f, "Invalid fee period: {err}"),
            Self::RangeConflict { period_id } => match period_id {
                Some(id) => {
                    write!(f, "A fee period (id {id}) already covers the requested date range")
                }
                None => write!(f, "A fee period already covers the requested date range"),
            },
            Self::PeriodNotFound(id) => write!(f, "Fee period {id} not found"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidPeriod(err)
    }
}
