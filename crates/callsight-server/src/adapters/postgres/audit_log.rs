//! PostgreSQL implementation of AuditLog

use async_trait::async_trait;
use sqlx::PgPool;

use callsight::{AuditEvent, AuditLog, DomainError};

pub struct PgAuditLog {
    pool: PgPool,
}

impl PgAuditLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLog for PgAuditLog {
    async fn log_event(&self, event: &AuditEvent) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO audit_events (id, kind, actor, organization_id, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id)
        .bind(event.kind.to_string())
        .bind(&event.actor)
        .bind(event.organization_id)
        .bind(&event.metadata)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        tracing::debug!("Recorded audit event {} ({})", event.kind, event.id);
        Ok(())
    }
}
