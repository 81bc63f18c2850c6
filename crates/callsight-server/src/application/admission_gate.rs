//! Admission Gate (Use Case)
//!
//! Applies the sliding-window policy to the persisted window for an actor.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use callsight::domain::{AdmissionDecision, AnalysisError, RateLimitPolicy};
use callsight::ports::RateLimitRepository;

/// Endpoint key used for analysis submissions
pub const ANALYZE_ENDPOINT: &str = "analyze";

pub struct AdmissionGate<R: RateLimitRepository> {
    repo: Arc<R>,
    policy: RateLimitPolicy,
}

impl<R: RateLimitRepository> AdmissionGate<R> {
    pub fn new(repo: Arc<R>, policy: RateLimitPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    /// Admit or reject one request from `identifier` on `endpoint`.
    pub async fn admit(&self, identifier: &str, endpoint: &str) -> Result<(), AnalysisError> {
        self.admit_at(identifier, endpoint, Utc::now()).await
    }

    /// Read-decide-write. Not atomic: concurrent requests from one actor can
    /// both read the same count and slightly overshoot the ceiling.
    pub async fn admit_at(
        &self,
        identifier: &str,
        endpoint: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AnalysisError> {
        let latest = self.repo.find_latest(identifier, endpoint).await?;

        match self
            .policy
            .evaluate(latest.as_ref(), identifier, endpoint, now)
        {
            AdmissionDecision::Incremented(window) | AdmissionDecision::Started(window) => {
                self.repo.save(&window).await?;
                Ok(())
            }
            AdmissionDecision::Rejected { retry_after } => {
                // Whole seconds, rounded up
                let retry_after_secs = (retry_after.num_milliseconds().max(0) as u64).div_ceil(1000);
                tracing::warn!(
                    "Rate limit exceeded for {} on {} (retry after {}s)",
                    identifier,
                    endpoint,
                    retry_after_secs
                );
                Err(AnalysisError::AdmissionRejected {
                    identifier: identifier.to_string(),
                    endpoint: endpoint.to_string(),
                    retry_after_secs,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryRateLimits;
    use chrono::Duration;

    fn gate(max: u32) -> (AdmissionGate<InMemoryRateLimits>, Arc<InMemoryRateLimits>) {
        let repo = Arc::new(InMemoryRateLimits::default());
        let policy = RateLimitPolicy::new(Duration::seconds(60), max);
        (AdmissionGate::new(repo.clone(), policy), repo)
    }

    #[tokio::test]
    async fn test_ceiling_plus_one_is_rejected() {
        let (gate, _) = gate(3);
        let now = Utc::now();

        for i in 0..3 {
            let at = now + Duration::seconds(i);
            assert!(gate.admit_at("user-1", ANALYZE_ENDPOINT, at).await.is_ok());
        }

        let err = gate
            .admit_at("user-1", ANALYZE_ENDPOINT, now + Duration::seconds(10))
            .await
            .unwrap_err();
        match err {
            AnalysisError::AdmissionRejected {
                retry_after_secs, ..
            } => assert_eq!(retry_after_secs, 50),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_window_resets_after_expiry() {
        let (gate, repo) = gate(1);
        let now = Utc::now();

        gate.admit_at("user-1", ANALYZE_ENDPOINT, now).await.unwrap();
        assert!(gate
            .admit_at("user-1", ANALYZE_ENDPOINT, now + Duration::seconds(30))
            .await
            .is_err());

        let later = now + Duration::seconds(61);
        gate.admit_at("user-1", ANALYZE_ENDPOINT, later).await.unwrap();

        let latest = repo
            .find_latest("user-1", ANALYZE_ENDPOINT)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.request_count, 1);
        assert_eq!(latest.window_start, later);
    }

    #[tokio::test]
    async fn test_identifiers_and_endpoints_are_independent() {
        let (gate, _) = gate(1);
        let now = Utc::now();

        gate.admit_at("user-1", ANALYZE_ENDPOINT, now).await.unwrap();
        gate.admit_at("user-2", ANALYZE_ENDPOINT, now).await.unwrap();
        gate.admit_at("user-1", "prompt", now).await.unwrap();
        assert!(gate.admit_at("user-1", ANALYZE_ENDPOINT, now).await.is_err());
    }
}
