//! Audit Log Port

use async_trait::async_trait;

use crate::domain::entities::AuditEvent;
use crate::domain::errors::DomainError;

/// Append-only sink for audit events
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Record an event. Callers treat failures as non-fatal.
    async fn log_event(&self, event: &AuditEvent) -> Result<(), DomainError>;
}
