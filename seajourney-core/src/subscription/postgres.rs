use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::debug;

use super::store::{
    StoreError, SubscriptionRequest, SubscriptionStore, UNIQUE_VIOLATION,
};

/// Writes subscriptions straight into a PostgreSQL table.
#[derive(Debug, Clone)]
pub struct PostgresSubscriptionStore {
    pool: PgPool,
    insert_sql: String,
}

impl PostgresSubscriptionStore {
    /// `table` must be a plain identifier; the config loader enforces this.
    pub fn from_pool(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            insert_sql: format!("INSERT INTO {table} (email) VALUES ($1)"),
        }
    }

    /// Open a small lazily-connected pool. The page issues at most one write
    /// at a time.
    pub fn connect_lazy(url: &str, table: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_lazy(url)
            .map_err(|e| StoreError::Backend(format!("invalid database URL: {e}")))?;
        Ok(Self::from_pool(pool, table))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubscriptionStore for PostgresSubscriptionStore {
    async fn insert(&self, request: &SubscriptionRequest) -> Result<(), StoreError> {
        let insert_res = sqlx::query(&self.insert_sql)
            .bind(request.email.as_str())
            .execute(&self.pool)
            .await;

        match insert_res {
            Ok(_) => {
                debug!("subscription row inserted");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) => {
                let code = db_err.code().map(|c| c.to_string());
                if code.as_deref() == Some(UNIQUE_VIOLATION) {
                    Err(StoreError::Duplicate)
                } else {
                    Err(StoreError::Backend(format!(
                        "insert failed ({}): {}",
                        code.as_deref().unwrap_or("no sqlstate"),
                        db_err.message()
                    )))
                }
            }
            Err(e) => Err(StoreError::Backend(format!("insert failed: {e}"))),
        }
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
