//! Analysis Application Service (Use Case)
//!
//! Runs one request through the pipeline:
//! admission -> audio -> context -> prompt -> model -> normalize -> store -> audit.
//! Stops at the first failing stage; nothing is retried across stages.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use uuid::Uuid;

use callsight::domain::{
    ActorContext, AnalysisError, AnalysisRecord, AudioNormalizer, AuditEvent, AuditEventKind,
    CallType, DomainError, IndustryCatalog, InvocationAttempt, NormalizedAnalysis,
    PromptComposer, PromptConfig, ResultNormalizer, Strictness,
};
use callsight::ports::{
    AnalysisRepository, AuditLog, GenerativeModel, OrganizationRepository, RateLimitRepository,
};

use super::{AdmissionGate, ModelInvoker, ANALYZE_ENDPOINT};

/// One analysis submission
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub organization_id: Uuid,
    pub audio: Vec<u8>,
    /// Declared container label (e.g. the multipart content type)
    pub content_type: String,
    pub filename: Option<String>,
    pub actor: ActorContext,
    pub call_type: CallType,
    pub language_hint: Option<String>,
    pub additional_instructions: Option<String>,
}

/// Result of a successful analysis
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub record_id: Uuid,
    pub analysis: NormalizedAnalysis,
    pub attempts: Vec<InvocationAttempt>,
}

/// Collaborators and fixed deployment values for [`AnalysisService`]
pub struct AnalysisPipeline<O, R, A, M, L>
where
    O: OrganizationRepository,
    R: RateLimitRepository,
    A: AnalysisRepository,
    M: GenerativeModel,
    L: AuditLog,
{
    pub organizations: Arc<O>,
    pub gate: AdmissionGate<R>,
    pub analyses: Arc<A>,
    pub invoker: ModelInvoker<M>,
    pub audit: Arc<L>,
    pub catalog: Arc<IndustryCatalog>,
    pub audio: AudioNormalizer,
    pub default_strictness: Strictness,
    pub timeout: Duration,
}

/// Application service for call analysis
pub struct AnalysisService<O, R, A, M, L>
where
    O: OrganizationRepository,
    R: RateLimitRepository,
    A: AnalysisRepository,
    M: GenerativeModel,
    L: AuditLog,
{
    pipeline: AnalysisPipeline<O, R, A, M, L>,
}

impl<O, R, A, M, L> AnalysisService<O, R, A, M, L>
where
    O: OrganizationRepository,
    R: RateLimitRepository,
    A: AnalysisRepository,
    M: GenerativeModel,
    L: AuditLog,
{
    pub fn new(pipeline: AnalysisPipeline<O, R, A, M, L>) -> Self {
        Self { pipeline }
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, AnalysisError> {
        let p = &self.pipeline;
        let actor = request.actor.identifier();

        // 1. Admission
        p.gate.admit(&actor, ANALYZE_ENDPOINT).await?;

        // 2. Audio
        let audio = p.audio.normalize(
            request.audio,
            &request.content_type,
            request.filename.as_deref(),
        )?;

        // 3. Context
        let organization = p
            .organizations
            .find_by_id(request.organization_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Organization", request.organization_id))?;
        let organization_id = organization.id;

        // 4. Prompt
        let config = PromptConfig::new(organization, request.call_type)
            .with_language_hint(request.language_hint)
            .with_additional_instructions(request.additional_instructions);
        let prompt = PromptComposer::compose_for(&p.catalog, &config, p.default_strictness);

        tracing::info!(
            "Analyzing {} call for organization {} ({} bytes {}, prompt {} chars)",
            config.call_type,
            organization_id,
            audio.len(),
            audio.format,
            prompt.len()
        );

        // 5. Model, bounded by the wall-clock ceiling
        let invocation = match tokio::time::timeout(
            p.timeout,
            p.invoker.invoke(&prompt.text, &audio),
        )
        .await
        {
            Ok(Ok(invocation)) => invocation,
            Ok(Err(AnalysisError::AllCandidatesFailed { attempts })) => {
                tracing::warn!(
                    "All {} model candidates failed for organization {}",
                    attempts.len(),
                    organization_id
                );
                let metadata = json!({
                    "callType": config.call_type,
                    "audioBytes": audio.len(),
                    "attempts": attempts.iter().map(InvocationAttempt::without_body).collect::<Vec<_>>(),
                });
                self.record_audit(AuditEventKind::AnalysisFailed, &actor, organization_id, metadata)
                    .await;
                return Err(AnalysisError::AllCandidatesFailed { attempts });
            }
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                let after_secs = p.timeout.as_secs();
                tracing::warn!(
                    "Model invocation for organization {} timed out after {}s",
                    organization_id,
                    after_secs
                );
                return Err(AnalysisError::Timeout { after_secs });
            }
        };

        // 6. Normalize
        let analysis = ResultNormalizer::normalize(&invocation.text, &invocation.model_id)
            .inspect_err(|_| {
                tracing::warn!(
                    "Model {} returned malformed output ({} chars)",
                    invocation.model_id,
                    invocation.text.len()
                );
            })?;

        // 7. Store
        let record = AnalysisRecord::new(
            organization_id,
            actor.clone(),
            config.call_type,
            audio.format,
            audio.len(),
            analysis.clone(),
        );
        let record_id = p.analyses.store(&record, &audio).await?;

        // 8. Audit
        let metadata = json!({
            "recordId": record_id,
            "modelUsed": invocation.model_id,
            "callType": config.call_type,
            "audioBytes": audio.len(),
            "attempts": invocation.attempts.len(),
            "overallScore": analysis.coaching.overall_score,
        });
        self.record_audit(AuditEventKind::AnalysisCompleted, &actor, organization_id, metadata)
            .await;

        tracing::info!(
            "Analysis {} completed by {} (score {})",
            record_id,
            invocation.model_id,
            analysis.coaching.overall_score
        );

        Ok(AnalysisOutcome {
            record_id,
            analysis,
            attempts: invocation.attempts,
        })
    }

    /// Audit failures are logged, never surfaced to the caller.
    async fn record_audit(
        &self,
        kind: AuditEventKind,
        actor: &str,
        organization_id: Uuid,
        metadata: serde_json::Value,
    ) {
        let event = AuditEvent::new(kind, actor.to_string(), organization_id, metadata);
        if let Err(e) = self.pipeline.audit.log_event(&event).await {
            tracing::warn!("Failed to record {} audit event: {}", kind, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        InMemoryAnalyses, InMemoryOrganizations, InMemoryRateLimits, RecordingAuditLog,
        ScriptedModel,
    };
    use callsight::domain::{
        AudioFormat, DecodingParams, ModelCandidateList, OrganizationProfile, RateLimitPolicy,
    };

    type TestService = AnalysisService<
        InMemoryOrganizations,
        InMemoryRateLimits,
        InMemoryAnalyses,
        ScriptedModel,
        RecordingAuditLog,
    >;

    struct Harness {
        service: TestService,
        organization_id: Uuid,
        model: Arc<ScriptedModel>,
        analyses: Arc<InMemoryAnalyses>,
        audit: Arc<RecordingAuditLog>,
    }

    fn harness(model: ScriptedModel, candidates: &str, timeout: Duration) -> Harness {
        let organization =
            OrganizationProfile::new("Acme Realty".to_string(), "real_estate".to_string());
        let organization_id = organization.id;
        let model = Arc::new(model);
        let analyses = Arc::new(InMemoryAnalyses::default());
        let audit = Arc::new(RecordingAuditLog::default());

        let service = AnalysisService::new(AnalysisPipeline {
            organizations: Arc::new(InMemoryOrganizations::with(organization)),
            gate: AdmissionGate::new(
                Arc::new(InMemoryRateLimits::default()),
                RateLimitPolicy::new(chrono::Duration::seconds(60), 2),
            ),
            analyses: analyses.clone(),
            invoker: ModelInvoker::new(
                model.clone(),
                ModelCandidateList::parse(candidates).unwrap(),
                DecodingParams::default(),
            ),
            audit: audit.clone(),
            catalog: Arc::new(IndustryCatalog::builtin()),
            audio: AudioNormalizer::new(16),
            default_strictness: Strictness::Strict,
            timeout,
        });

        Harness {
            service,
            organization_id,
            model,
            analyses,
            audit,
        }
    }

    fn request(organization_id: Uuid, audio: Vec<u8>) -> AnalysisRequest {
        AnalysisRequest {
            organization_id,
            audio,
            content_type: "audio/x-wav".to_string(),
            filename: Some("call.wav".to_string()),
            actor: ActorContext::new(Some("agent-7".to_string()), None),
            call_type: CallType::Sales,
            language_hint: Some("English".to_string()),
            additional_instructions: None,
        }
    }

    const RED_FLAGS: &str = r#"{"coaching":{"redFlags":["None","Interrupted customer twice"]}}"#;

    #[tokio::test]
    async fn test_end_to_end_with_fallback() {
        let model = ScriptedModel::new()
            .fail("primary", "503 unavailable")
            .answer("secondary", RED_FLAGS);
        let h = harness(model, "primary,secondary", Duration::from_secs(5));

        let outcome = h
            .service
            .analyze(request(h.organization_id, vec![0u8; 16]))
            .await
            .unwrap();

        assert_eq!(
            outcome.analysis.coaching.red_flags,
            vec!["Interrupted customer twice".to_string()]
        );
        assert_eq!(outcome.analysis.model_used, "secondary");
        assert_eq!(outcome.analysis.language, "unknown");
        assert_eq!(outcome.attempts.len(), 2);
        assert!(!outcome.attempts[0].is_success());

        let records = h.analyses.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, outcome.record_id);
        assert_eq!(records[0].audio_format, AudioFormat::Wav);
        assert_eq!(records[0].actor, "agent-7");

        let events = h.audit.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, AuditEventKind::AnalysisCompleted);

        let prompts = h.model.prompts.lock().unwrap();
        assert!(prompts[0].contains("## Industry Context: Real Estate"));
        assert_eq!(prompts[0], prompts[1]);
    }

    #[tokio::test]
    async fn test_oversized_audio_is_rejected_before_the_model() {
        let h = harness(
            ScriptedModel::new().answer("m1", "{}"),
            "m1",
            Duration::from_secs(5),
        );

        let err = h
            .service
            .analyze(request(h.organization_id, vec![0u8; 17]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::OversizedInput {
                size: Some(17),
                limit: 16
            }
        ));
        assert!(h.model.calls().is_empty());
        assert!(h.audit.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_applies_before_audio_checks() {
        let h = harness(
            ScriptedModel::new().answer("m1", "{}"),
            "m1",
            Duration::from_secs(5),
        );

        for _ in 0..2 {
            h.service
                .analyze(request(h.organization_id, vec![1u8; 4]))
                .await
                .unwrap();
        }
        let err = h
            .service
            .analyze(request(h.organization_id, vec![]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "admission_rejected");
        assert_eq!(h.model.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_all_candidates_failed_emits_one_audit_event() {
        let model = ScriptedModel::new().fail("m1", "quota").fail("m2", "quota");
        let h = harness(model, "m1,m2", Duration::from_secs(5));

        let err = h
            .service
            .analyze(request(h.organization_id, vec![1u8; 4]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "all_candidates_failed");
        assert!(h.analyses.records.lock().unwrap().is_empty());

        let events = h.audit.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, AuditEventKind::AnalysisFailed);
        assert_eq!(events[0].metadata["attempts"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_output_is_not_stored_or_audited() {
        let h = harness(
            ScriptedModel::new().answer("m1", "I could not hear the call."),
            "m1",
            Duration::from_secs(5),
        );

        let err = h
            .service
            .analyze(request(h.organization_id, vec![1u8; 4]))
            .await
            .unwrap_err();

        match err {
            AnalysisError::MalformedModelOutput { model_id, raw } => {
                assert_eq!(model_id, "m1");
                assert_eq!(raw, "I could not hear the call.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(h.analyses.records.lock().unwrap().is_empty());
        assert!(h.audit.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_stores_nothing() {
        let model = ScriptedModel::new()
            .answer("slow", "{}")
            .with_delay(Duration::from_millis(500));
        let h = harness(model, "slow", Duration::from_millis(20));

        let err = h
            .service
            .analyze(request(h.organization_id, vec![1u8; 4]))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Timeout { .. }));
        assert!(h.analyses.records.lock().unwrap().is_empty());
        assert!(h.audit.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_organization_is_a_collaborator_error() {
        let h = harness(
            ScriptedModel::new().answer("m1", "{}"),
            "m1",
            Duration::from_secs(5),
        );

        let err = h
            .service
            .analyze(request(Uuid::new_v4(), vec![1u8; 4]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::Collaborator(DomainError::NotFound { .. })
        ));
        assert!(h.model.calls().is_empty());
    }
}
