//! PostgreSQL implementation of AnalysisRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use callsight::{AnalysisRecord, AnalysisRepository, AudioPayload, DomainError};

pub struct PgAnalysisRepository {
    pool: PgPool,
}

impl PgAnalysisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisRepository for PgAnalysisRepository {
    async fn store(
        &self,
        record: &AnalysisRecord,
        audio: &AudioPayload,
    ) -> Result<Uuid, DomainError> {
        let analysis = serde_json::to_value(&record.analysis)
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO analyses
                (id, organization_id, actor, call_type, audio_format, audio_size, audio,
                 analysis, model_used, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(record.id)
        .bind(record.organization_id)
        .bind(&record.actor)
        .bind(record.call_type.to_string())
        .bind(record.audio_format.to_string())
        .bind(i64::try_from(record.audio_size).unwrap_or(i64::MAX))
        .bind(&audio.bytes)
        .bind(&analysis)
        .bind(&record.analysis.model_used)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(id)
    }
}
