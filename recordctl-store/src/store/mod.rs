//! Record store trait and its backends
//!
//! Both backends run the same statement text: `?` placeholders and
//! back-quoted identifiers are understood by MySQL and SQLite alike.
//! Statements are marked non-persistent so the prepared handle is closed
//! when the operation finishes instead of lingering in the connection cache.

#[macro_use]
mod macros;
mod mysql;
mod sqlite;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::record::Record;

pub use mysql::MySqlRecordStore;
pub use sqlite::SqliteRecordStore;

pub(crate) const INSERT_RECORD: &str = "INSERT INTO `data` (`key`, `value`) VALUES (?, ?)";

pub(crate) const SELECT_RECORD: &str = "SELECT `id`, `key`, `value`, `create_time`, `update_time` \
     FROM `data` WHERE `id` = ?";

pub(crate) const UPDATE_RECORD: &str = "UPDATE `data` SET `key` = ?, `value` = ? WHERE `id` = ?";

pub(crate) const DELETE_RECORD: &str = "DELETE FROM `data` WHERE `id` = ?";

/// CRUD over the `data` table.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a row and return it as read back from the database,
    /// so column defaults (timestamps) are populated.
    async fn create(&self, key: &str, value: &str) -> Result<Record>;

    /// Fetch a row by id. `Ok(None)` when no row matches.
    async fn read(&self, id: i64) -> Result<Option<Record>>;

    /// Overwrite key/value of a row, then read it back.
    ///
    /// The trailing read happens whether or not the update matched a row,
    /// so a missing id yields `Ok(None)` rather than an error.
    async fn update(&self, id: i64, key: &str, value: &str) -> Result<Option<Record>>;

    /// Remove a row. `true` only if a row was actually deleted.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Convert a failed statement into a [`StoreError`]. Callers decide how
/// loudly to report it.
pub(crate) fn statement_failed(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| {
        tracing::debug!(operation, error = %err, "statement failed");
        StoreError::Database(err)
    }
}
