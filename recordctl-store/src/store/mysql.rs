use sqlx::mysql::MySqlQueryResult;
use sqlx::MySqlPool;

/// MySQL-backed record store
pub struct MySqlRecordStore<'a> {
    pool: &'a MySqlPool,
}

impl<'a> MySqlRecordStore<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }
}

// MySQL counts changed rows, so an identical rewrite reports 0 affected.
impl_record_store!(
    MySqlRecordStore,
    |result: &MySqlQueryResult| result.last_insert_id() as i64
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use sqlx::mysql::MySqlPoolOptions;

    // Integration tests require a real MySQL with the `data` table.
    // Run with: DATABASE_URL=mysql://... cargo test -p recordctl-store -- --ignored

    async fn pool() -> MySqlPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("pool creation failed");
        sqlx::raw_sql(include_str!("../../schema/mysql.sql"))
            .execute(&pool)
            .await
            .expect("schema setup failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_read_update_delete() {
        let pool = pool().await;
        let store = MySqlRecordStore::new(&pool);

        let created = store.create("hello", "world").await.unwrap();
        assert_eq!((created.key.as_str(), created.value.as_str()), ("hello", "world"));

        let updated = store
            .update(created.id, "hello", "golang")
            .await
            .unwrap()
            .expect("row still exists");
        assert_eq!(updated.value, "golang");
        assert_eq!(updated.create_time, created.create_time);

        assert!(store.delete(created.id).await.unwrap());
        assert_eq!(store.read(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_row_is_false() {
        let pool = pool().await;
        let store = MySqlRecordStore::new(&pool);

        assert!(!store.delete(i64::MAX).await.unwrap());
    }
}
