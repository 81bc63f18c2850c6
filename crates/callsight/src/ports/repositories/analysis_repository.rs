//! Analysis Repository Port
//!
//! Stores completed analyses together with the audio they were produced from.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, AnalysisRecord, AudioPayload};

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Persist a record and its audio, returning the record id
    async fn store(&self, record: &AnalysisRecord, audio: &AudioPayload)
        -> Result<Uuid, DomainError>;
}
