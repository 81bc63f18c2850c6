//! PostgreSQL implementation of RateLimitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use callsight::{DomainError, RateLimitRepository, RateLimitWindow};

pub struct PgRateLimitRepository {
    pool: PgPool,
}

impl PgRateLimitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RateLimitRow {
    id: Uuid,
    identifier: String,
    endpoint: String,
    window_start: chrono::DateTime<chrono::Utc>,
    request_count: i32,
}

impl From<RateLimitRow> for RateLimitWindow {
    fn from(row: RateLimitRow) -> Self {
        Self {
            id: row.id,
            identifier: row.identifier,
            endpoint: row.endpoint,
            window_start: row.window_start,
            request_count: u32::try_from(row.request_count).unwrap_or(0),
        }
    }
}

#[async_trait]
impl RateLimitRepository for PgRateLimitRepository {
    async fn find_latest(
        &self,
        identifier: &str,
        endpoint: &str,
    ) -> Result<Option<RateLimitWindow>, DomainError> {
        let row = sqlx::query_as::<_, RateLimitRow>(
            r#"
            SELECT * FROM rate_limits
            WHERE identifier = $1 AND endpoint = $2
            ORDER BY window_start DESC
            LIMIT 1
            "#,
        )
        .bind(identifier)
        .bind(endpoint)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, window: &RateLimitWindow) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO rate_limits (id, identifier, endpoint, window_start, request_count)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET request_count = EXCLUDED.request_count
            "#,
        )
        .bind(window.id)
        .bind(&window.identifier)
        .bind(&window.endpoint)
        .bind(window.window_start)
        .bind(i32::try_from(window.request_count).unwrap_or(i32::MAX))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
