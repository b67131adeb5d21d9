//! `site_content` table access: one TOML document per key.

use sqlx::PgPool;
use store::SiteContent;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The stored site copy, if any has been saved.
    pub async fn load(&self) -> Result<Option<SiteContent>, ApiError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT body FROM site_content WHERE key = $1")
                .bind(SiteContent::key())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(body,)| {
            SiteContent::from_toml(&body).map_err(|e| ApiError::Content(e.to_string()))
        })
        .transpose()
    }

    /// Insert or replace the stored site copy. Saving the same content twice is a no-op in effect.
    pub async fn save(&self, content: &SiteContent) -> Result<(), ApiError> {
        let body = content
            .to_toml()
            .map_err(|e| ApiError::Content(e.to_string()))?;

        sqlx::query(
            "INSERT INTO site_content (key, body)
             VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET
                body = $2,
                updated_at = NOW()",
        )
        .bind(SiteContent::key())
        .bind(&body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Seed the table from a TOML file when nothing is stored yet.
    ///
    /// Returns true when a seed was written.
    pub async fn seed_if_empty(&self, path: &str) -> Result<bool, ApiError> {
        if self.load().await?.is_some() {
            return Ok(false);
        }
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::Config(format!("Cannot read {}: {}", path, e)))?;
        let content =
            SiteContent::from_toml(&raw).map_err(|e| ApiError::Content(e.to_string()))?;
        content.validate()?;
        self.save(&content).await?;
        Ok(true)
    }
}
