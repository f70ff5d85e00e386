//! Connection pool management
//!
//! The pool is created once by the caller and passed by reference into
//! every store; there is no process-wide handle.

use std::str::FromStr;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{MySqlPool, SqlitePool};
use tracing::{debug, info};

use crate::config::{DatabaseConfig, PoolConfig};
use crate::error::Result;
use crate::store::{MySqlRecordStore, RecordStore, SqliteRecordStore};

/// An open pool for one of the supported backends.
#[derive(Debug, Clone)]
pub enum DbPool {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

/// Open a pool and establish its first connection.
///
/// sqlx has no separate idle limit: `max_idle` caps the pool size, which
/// also bounds how many idle connections are kept for reuse.
///
/// # Errors
///
/// Returns an error if the URL is rejected or the database is unreachable.
pub async fn connect(database: &DatabaseConfig, pool_config: &PoolConfig) -> Result<DbPool> {
    let max_connections = pool_config.max_idle.max(1);
    debug!(max_connections, "opening pool");

    let pool = match database {
        DatabaseConfig::MySql(config) => DbPool::MySql(
            MySqlPoolOptions::new()
                .max_connections(max_connections)
                .connect_with(config.connect_options())
                .await?,
        ),
        DatabaseConfig::Sqlite(url) => DbPool::Sqlite(
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(SqliteConnectOptions::from_str(url)?)
                .await?,
        ),
    };

    info!(backend = pool.backend(), %database, "connected");
    Ok(pool)
}

impl DbPool {
    /// A record store borrowing this pool.
    pub fn store(&self) -> Box<dyn RecordStore + '_> {
        match self {
            Self::MySql(pool) => Box::new(MySqlRecordStore::new(pool)),
            Self::Sqlite(pool) => Box::new(SqliteRecordStore::new(pool)),
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Close every connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        match self {
            Self::MySql(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
        debug!(backend = self.backend(), "pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let database: DatabaseConfig = "sqlite::memory:".parse().unwrap();
        let pool = connect(&database, &PoolConfig { max_idle: 1 })
            .await
            .expect("pool creation failed");

        assert_eq!(pool.backend(), "sqlite");

        let DbPool::Sqlite(inner) = &pool else {
            panic!("expected sqlite pool");
        };
        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(inner)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);

        pool.close().await;
    }

    #[tokio::test]
    async fn zero_idle_limit_still_opens_one_connection() {
        let database: DatabaseConfig = "sqlite::memory:".parse().unwrap();
        let pool = connect(&database, &PoolConfig { max_idle: 0 }).await;
        assert!(pool.is_ok());
    }

    #[tokio::test]
    async fn unreachable_sqlite_file_is_an_error() {
        let database: DatabaseConfig = "sqlite:///nonexistent-dir/records.db".parse().unwrap();
        let err = connect(&database, &PoolConfig::default()).await.unwrap_err();
        assert!(matches!(err, crate::StoreError::Database(_)));
    }
}
