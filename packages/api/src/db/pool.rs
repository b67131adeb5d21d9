//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::config;
use crate::error::ApiError;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        let config = config().await?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(config.db_timeout)
            .connect(&config.database_url)
            .await?;
        Ok(pool)
    })
    .await
}
