//! AnalysisRecord - Persisted result of a successful analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::NormalizedAnalysis;
use crate::domain::value_objects::{AudioFormat, CallType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub actor: String,
    pub call_type: CallType,
    pub audio_format: AudioFormat,
    pub audio_size: usize,
    pub analysis: NormalizedAnalysis,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        organization_id: Uuid,
        actor: String,
        call_type: CallType,
        audio_format: AudioFormat,
        audio_size: usize,
        analysis: NormalizedAnalysis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            actor,
            call_type,
            audio_format,
            audio_size,
            analysis,
            created_at: Utc::now(),
        }
    }
}
