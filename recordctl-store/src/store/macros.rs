/// Implement [`RecordStore`](super::RecordStore) for a store struct holding
/// `pool: &PoolType`.
///
/// Backends differ only in how the new row id is read off the insert
/// result, passed in as `$insert_id`.
macro_rules! impl_record_store {
    ($store:ident, $insert_id:expr) => {
        #[async_trait::async_trait]
        impl $crate::store::RecordStore for $store<'_> {
            async fn create(&self, key: &str, value: &str) -> $crate::error::Result<$crate::record::Record> {
                let result = sqlx::query($crate::store::INSERT_RECORD)
                    .bind(key)
                    .bind(value)
                    .persistent(false)
                    .execute(self.pool)
                    .await
                    .map_err($crate::store::statement_failed("insert"))?;

                let id: i64 = ($insert_id)(&result);
                tracing::debug!(id, "inserted record");

                $crate::store::RecordStore::read(self, id)
                    .await?
                    .ok_or($crate::error::StoreError::NotFound { id })
            }

            async fn read(&self, id: i64) -> $crate::error::Result<Option<$crate::record::Record>> {
                let record = sqlx::query_as::<_, $crate::record::Record>($crate::store::SELECT_RECORD)
                    .bind(id)
                    .persistent(false)
                    .fetch_optional(self.pool)
                    .await
                    .map_err($crate::store::statement_failed("select"))?;

                Ok(record)
            }

            async fn update(
                &self,
                id: i64,
                key: &str,
                value: &str,
            ) -> $crate::error::Result<Option<$crate::record::Record>> {
                let result = sqlx::query($crate::store::UPDATE_RECORD)
                    .bind(key)
                    .bind(value)
                    .bind(id)
                    .persistent(false)
                    .execute(self.pool)
                    .await
                    .map_err($crate::store::statement_failed("update"))?;

                tracing::debug!(id, rows_affected = result.rows_affected(), "updated record");

                $crate::store::RecordStore::read(self, id).await
            }

            async fn delete(&self, id: i64) -> $crate::error::Result<bool> {
                let result = sqlx::query($crate::store::DELETE_RECORD)
                    .bind(id)
                    .persistent(false)
                    .execute(self.pool)
                    .await
                    .map_err($crate::store::statement_failed("delete"))?;

                tracing::debug!(id, rows_affected = result.rows_affected(), "deleted record");
                Ok(result.rows_affected() > 0)
            }
        }
    };
}
