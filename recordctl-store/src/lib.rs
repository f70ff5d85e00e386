//! recordctl-store: parameterized CRUD over a single `data` table
//!
//! The store never creates the schema and holds no cache. Every operation
//! binds its arguments as statement parameters and releases the prepared
//! statement before returning.

pub mod config;
pub mod error;
pub mod pool;
pub mod record;
pub mod store;

pub use config::{DatabaseConfig, MySqlConfig, PoolConfig, DEFAULT_DSN};
pub use error::{Result, StoreError};
pub use pool::{connect, DbPool};
pub use record::Record;
pub use store::{MySqlRecordStore, RecordStore, SqliteRecordStore};
