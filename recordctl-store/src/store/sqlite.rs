use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;

/// SQLite-backed record store
///
/// Same statements as the MySQL store; used for local files and tests.
pub struct SqliteRecordStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SqliteRecordStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }
}

impl_record_store!(
    SqliteRecordStore,
    |result: &SqliteQueryResult| result.last_insert_rowid()
);
