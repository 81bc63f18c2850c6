//! PostgreSQL implementation of OrganizationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use callsight::{AiSettings, DomainError, OrganizationProfile, OrganizationRepository};

/// PostgreSQL implementation of OrganizationRepository
pub struct PgOrganizationRepository {
    pool: PgPool,
}

impl PgOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct OrganizationRow {
    id: Uuid,
    name: String,
    industry: String,
    ai_settings: serde_json::Value,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<OrganizationRow> for OrganizationProfile {
    fn from(row: OrganizationRow) -> Self {
        // Settings are stored as written by admins; unreadable JSON means no overrides
        let ai_settings = serde_json::from_value::<AiSettings>(row.ai_settings).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable AI settings for organization {}: {}", row.id, e);
            AiSettings::default()
        });

        Self {
            id: row.id,
            name: row.name,
            industry: row.industry,
            ai_settings,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrganizationProfile>, DomainError> {
        let row = sqlx::query_as::<_, OrganizationRow>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(
        &self,
        profile: &OrganizationProfile,
    ) -> Result<OrganizationProfile, DomainError> {
        let ai_settings = serde_json::to_value(&profile.ai_settings)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            INSERT INTO organizations (id, name, industry, ai_settings, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, industry = EXCLUDED.industry,
                ai_settings = EXCLUDED.ai_settings, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.industry)
        .bind(&ai_settings)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
