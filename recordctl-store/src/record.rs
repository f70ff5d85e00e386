//! The `data` row as seen by callers

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;

/// Timestamp layout used in the human-readable record line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the `data` table.
///
/// `id`, `create_time` and `update_time` are assigned by the database;
/// only `key` and `value` are ever written by this crate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Record {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}

/// `0001-01-01 00:00:00`, the timestamp of a zero-valued record.
pub fn zero_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl Default for Record {
    /// Zero-valued record, printed in place of a missing row.
    fn default() -> Self {
        Self {
            id: 0,
            key: String::new(),
            value: String::new(),
            create_time: zero_time(),
            update_time: zero_time(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id:{},key:{},value:{},create_time:{},update_time:{}",
            self.id,
            self.key,
            self.value,
            self.create_time.format(TIMESTAMP_FORMAT),
            self.update_time.format(TIMESTAMP_FORMAT),
        )
    }
}
