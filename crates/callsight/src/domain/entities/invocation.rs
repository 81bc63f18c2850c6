//! Model invocation - Candidate chain, decoding parameters and attempt records
//!
//! Pure domain entities without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Ordered, de-duplicated fallback chain of model identifiers.
///
/// Order is fixed for the lifetime of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCandidateList(Vec<String>);

impl ModelCandidateList {
    /// Build a candidate list, dropping blanks and repeated ids (first wins).
    pub fn new<I, S>(candidates: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for candidate in candidates {
            let id = candidate.into().trim().to_string();
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.is_empty() {
            return Err(DomainError::Validation(
                "Model candidate list must contain at least one model".to_string(),
            ));
        }

        Ok(Self(ids))
    }

    /// Parse a comma-separated list such as `gemini-2.5-pro,gemini-2.5-flash`.
    pub fn parse(list: &str) -> Result<Self, DomainError> {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Greedy decoding parameters sent with every attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingParams {
    pub temperature: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl DecodingParams {
    /// Temperature 0 / top-k 1 for reproducible output
    pub fn greedy(max_output_tokens: u32) -> Self {
        Self {
            temperature: 0.0,
            top_k: 1,
            max_output_tokens,
        }
    }
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self::greedy(16384)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptOutcome {
    Success,
    Failure,
}

/// Record of one candidate tried within a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationAttempt {
    pub model_id: String,
    pub outcome: AttemptOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl InvocationAttempt {
    pub fn success(model_id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            outcome: AttemptOutcome::Success,
            raw_text: Some(raw_text.into()),
            error_message: None,
        }
    }

    pub fn failure(model_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            outcome: AttemptOutcome::Failure,
            raw_text: None,
            error_message: Some(error_message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == AttemptOutcome::Success
    }

    /// Error message for failures, `"ok"` for successes
    pub fn detail(&self) -> &str {
        self.error_message.as_deref().unwrap_or("ok")
    }

    /// Copy without the raw response body, for logs and audit metadata
    pub fn without_body(&self) -> Self {
        Self {
            raw_text: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_list_dedupes_in_order() {
        let list = ModelCandidateList::parse("b-model, a-model,b-model,, c-model").unwrap();
        assert_eq!(list.as_slice(), &["b-model", "a-model", "c-model"]);
    }

    #[test]
    fn test_candidate_list_rejects_empty() {
        assert!(ModelCandidateList::parse(" , ").is_err());
        assert!(ModelCandidateList::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_greedy_params() {
        let params = DecodingParams::greedy(2048);
        assert_eq!(params.temperature, 0.0);
        assert_eq!(params.top_k, 1);
        assert_eq!(params.max_output_tokens, 2048);
    }

    #[test]
    fn test_attempt_serialization_omits_missing_fields() {
        let json = serde_json::to_value(InvocationAttempt::failure("m", "boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"modelId": "m", "outcome": "failure", "errorMessage": "boom"})
        );
    }
}
