//! Admission Policy
//!
//! Pure sliding-window decision over a [`RateLimitWindow`]. Reading and
//! writing the window is left to the caller (see the rate limit repository
//! port); the combination is a best-effort, non-atomic counter.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::RateLimitWindow;

/// Window duration and request ceiling for one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub max_requests: u32,
}

impl RateLimitPolicy {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(Duration::seconds(60), 10)
    }
}

/// Outcome of evaluating one request against the latest window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionDecision {
    /// Window still open and below the ceiling; count incremented
    Incremented(RateLimitWindow),
    /// No window, or the previous one expired; new window with count 1
    Started(RateLimitWindow),
    /// Window open and at the ceiling
    Rejected { retry_after: Duration },
}

impl AdmissionDecision {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, AdmissionDecision::Rejected { .. })
    }
}

impl RateLimitPolicy {
    /// Decide whether a request from `identifier` on `endpoint` is admitted.
    pub fn evaluate(
        &self,
        latest: Option<&RateLimitWindow>,
        identifier: &str,
        endpoint: &str,
        now: DateTime<Utc>,
    ) -> AdmissionDecision {
        match latest {
            Some(window) if now - window.window_start < self.window => {
                if window.request_count < self.max_requests {
                    AdmissionDecision::Incremented(RateLimitWindow {
                        request_count: window.request_count + 1,
                        ..window.clone()
                    })
                } else {
                    let retry_after = self.window - (now - window.window_start);
                    AdmissionDecision::Rejected { retry_after }
                }
            }
            _ => AdmissionDecision::Started(RateLimitWindow::start(identifier, endpoint, now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max: u32) -> RateLimitPolicy {
        RateLimitPolicy::new(Duration::seconds(60), max)
    }

    fn admit(
        policy: &RateLimitPolicy,
        window: &mut Option<RateLimitWindow>,
        now: DateTime<Utc>,
    ) -> bool {
        match policy.evaluate(window.as_ref(), "user-1", "analyze", now) {
            AdmissionDecision::Incremented(w) | AdmissionDecision::Started(w) => {
                *window = Some(w);
                true
            }
            AdmissionDecision::Rejected { .. } => false,
        }
    }

    #[test]
    fn test_first_request_starts_window() {
        let now = Utc::now();
        let decision = policy(3).evaluate(None, "user-1", "analyze", now);
        match decision {
            AdmissionDecision::Started(window) => {
                assert_eq!(window.request_count, 1);
                assert_eq!(window.window_start, now);
                assert_eq!(window.identifier, "user-1");
                assert_eq!(window.endpoint, "analyze");
            }
            other => panic!("Expected Started, got {other:?}"),
        }
    }

    #[test]
    fn test_ceiling_plus_one_is_rejected() {
        let policy = policy(3);
        let start = Utc::now();
        let mut window = None;

        for i in 0..3 {
            assert!(admit(&policy, &mut window, start + Duration::seconds(i)));
        }
        assert_eq!(window.as_ref().unwrap().request_count, 3);
        assert!(!admit(&policy, &mut window, start + Duration::seconds(3)));
        assert_eq!(window.as_ref().unwrap().request_count, 3);
    }

    #[test]
    fn test_expired_window_resets_count() {
        let policy = policy(2);
        let start = Utc::now();
        let mut window = None;

        assert!(admit(&policy, &mut window, start));
        assert!(admit(&policy, &mut window, start));
        assert!(!admit(&policy, &mut window, start + Duration::seconds(59)));

        let later = start + Duration::seconds(60);
        assert!(admit(&policy, &mut window, later));
        let window = window.unwrap();
        assert_eq!(window.request_count, 1);
        assert_eq!(window.window_start, later);
    }

    #[test]
    fn test_rejection_reports_remaining_window() {
        let policy = policy(1);
        let start = Utc::now();
        let existing = RateLimitWindow {
            request_count: 1,
            ..RateLimitWindow::start("user-1", "analyze", start)
        };

        let decision =
            policy.evaluate(Some(&existing), "user-1", "analyze", start + Duration::seconds(45));
        assert_eq!(
            decision,
            AdmissionDecision::Rejected {
                retry_after: Duration::seconds(15)
            }
        );
    }
}
