//! In-memory port implementations for application tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use callsight::domain::{
    AnalysisRecord, AudioPayload, AuditEvent, DecodingParams, DomainError, OrganizationProfile,
    RateLimitWindow,
};
use callsight::ports::{
    AnalysisRepository, AuditLog, GenerativeModel, OrganizationRepository, RateLimitRepository,
};

#[derive(Default)]
pub struct InMemoryOrganizations {
    profiles: Mutex<HashMap<Uuid, OrganizationProfile>>,
}

impl InMemoryOrganizations {
    pub fn with(profile: OrganizationProfile) -> Self {
        let store = Self::default();
        store.profiles.lock().unwrap().insert(profile.id, profile);
        store
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizations {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrganizationProfile>, DomainError> {
        Ok(self.profiles.lock().unwrap().get(&id).cloned())
    }

    async fn save(
        &self,
        profile: &OrganizationProfile,
    ) -> Result<OrganizationProfile, DomainError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id, profile.clone());
        Ok(profile.clone())
    }
}

#[derive(Default)]
pub struct InMemoryRateLimits {
    pub windows: Mutex<Vec<RateLimitWindow>>,
}

#[async_trait]
impl RateLimitRepository for InMemoryRateLimits {
    async fn find_latest(
        &self,
        identifier: &str,
        endpoint: &str,
    ) -> Result<Option<RateLimitWindow>, DomainError> {
        Ok(self
            .windows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.identifier == identifier && w.endpoint == endpoint)
            .max_by_key(|w| w.window_start)
            .cloned())
    }

    async fn save(&self, window: &RateLimitWindow) -> Result<(), DomainError> {
        let mut windows = self.windows.lock().unwrap();
        match windows.iter_mut().find(|w| w.id == window.id) {
            Some(existing) => *existing = window.clone(),
            None => windows.push(window.clone()),
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAnalyses {
    pub records: Mutex<Vec<AnalysisRecord>>,
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalyses {
    async fn store(
        &self,
        record: &AnalysisRecord,
        _audio: &AudioPayload,
    ) -> Result<Uuid, DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(record.id)
    }
}

#[derive(Default)]
pub struct RecordingAuditLog {
    pub events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditLog for RecordingAuditLog {
    async fn log_event(&self, event: &AuditEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Backend that answers per model id from a script
#[derive(Default)]
pub struct ScriptedModel {
    responses: HashMap<String, Result<String, String>>,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, model_id: &str, text: &str) -> Self {
        self.responses
            .insert(model_id.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, model_id: &str, error: &str) -> Self {
        self.responses
            .insert(model_id.to_string(), Err(error.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
        _audio: &AudioPayload,
        _params: &DecodingParams,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(model_id.to_string());
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.responses.get(model_id) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(DomainError::ExternalService(message.clone())),
            None => Err(DomainError::ExternalService(format!(
                "model {} not found",
                model_id
            ))),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}
