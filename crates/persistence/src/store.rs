// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authoritative fee period store.
//!
//! The store is the final gate for the non-overlap rule: a create that
//! collides with a stored period is rejected here regardless of what the
//! submitting client validated. Timestamps are stored as UTC ISO 8601 text.

use crate::error::PersistenceError;
use crate::schema::initialize_schema;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};
use tarif_domain::{FeePeriod, FeePeriodDraft, find_overlap, validate_period_fields};
use tracing::{debug, info};

const PERIOD_COLUMNS: &str = "id, base_fee, price_per_unit, monthly_discount, date_start, date_end";

/// SQLite-backed store for fee periods.
pub struct FeeStore {
    conn: Connection,
}

impl FeeStore {
    /// Opens (or creates) a file-based store and initializes its schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(path: &str) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store and initializes its schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, PersistenceError> {
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns all stored fee periods.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<FeePeriod>, PersistenceError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PERIOD_COLUMNS} FROM fee_periods"))?;
        let periods: Vec<FeePeriod> = stmt
            .query_map([], map_period_row)?
            .collect::<Result<Vec<FeePeriod>, rusqlite::Error>>()?;

        debug!(count = periods.len(), "Listed fee periods");

        Ok(periods)
    }

    /// Stores a new fee period, assigning its identifier.
    ///
    /// The draft's fields are validated and the requested range is checked
    /// against every stored period; the store is the final authority for the
    /// non-overlap rule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The draft's fields are invalid
    /// - The requested range collides with a stored period
    /// - The insert or read-back fails
    pub fn create(&mut self, draft: &FeePeriodDraft) -> Result<FeePeriod, PersistenceError> {
        validate_period_fields(draft)?;

        let stored: Vec<FeePeriod> = self.list()?;
        if let Some(conflict) = find_overlap(&stored, draft.date_start, draft.date_end) {
            debug!(
                conflict_id = conflict.period_id(),
                "Rejected fee period create for overlapping range"
            );
            return Err(PersistenceError::RangeConflict {
                period_id: conflict.period_id(),
            });
        }

        self.conn.execute(
            "INSERT INTO fee_periods (base_fee, price_per_unit, monthly_discount, date_start, date_end)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.base_fee,
                draft.price_per_unit,
                draft.monthly_discount,
                draft.date_start,
                draft.date_end,
            ],
        )?;

        let period_id: i64 = self.conn.last_insert_rowid();
        let period: FeePeriod = self
            .find_by_id(period_id)?
            .ok_or(PersistenceError::PeriodNotFound(period_id))?;

        info!(period_id, "Stored fee period");

        Ok(period)
    }

    /// Deletes a stored fee period by identifier.
    ///
    /// Deleting an id that is already gone succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    pub fn delete(&mut self, period_id: i64) -> Result<(), PersistenceError> {
        let changed: usize = self
            .conn
            .execute("DELETE FROM fee_periods WHERE id = ?1", params![period_id])?;

        debug!(period_id, deleted = changed > 0, "Deleted fee period");

        Ok(())
    }

    /// Returns the first stored period whose range contains either probe
    /// instant, treating ranges as half-open `[date_start, date_end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_in_range(
        &self,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
    ) -> Result<Option<FeePeriod>, PersistenceError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PERIOD_COLUMNS} FROM fee_periods
             WHERE (date_start <= ?1 AND ?1 < date_end)
                OR (date_start <= ?2 AND ?2 < date_end)
             LIMIT 1"
        ))?;

        let mut rows = stmt.query_map(params![date_start, date_end], map_period_row)?;
        rows.next().transpose().map_err(Into::into)
    }

    fn find_by_id(&self, period_id: i64) -> Result<Option<FeePeriod>, PersistenceError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PERIOD_COLUMNS} FROM fee_periods WHERE id = ?1"
        ))?;

        let mut rows = stmt.query_map(params![period_id], map_period_row)?;
        rows.next().transpose().map_err(Into::into)
    }
}

fn map_period_row(row: &Row<'_>) -> Result<FeePeriod, rusqlite::Error> {
    Ok(FeePeriod::with_id(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}
