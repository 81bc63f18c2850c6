//! Model Invoker (Use Case)
//!
//! Walks the fixed candidate chain until one model returns usable text.

use std::sync::Arc;

use callsight::domain::{
    AnalysisError, AudioPayload, DecodingParams, InvocationAttempt, ModelCandidateList,
};
use callsight::ports::GenerativeModel;

/// Successful invocation plus every attempt made to get there
#[derive(Debug, Clone)]
pub struct Invocation {
    pub model_id: String,
    pub text: String,
    pub attempts: Vec<InvocationAttempt>,
}

pub struct ModelInvoker<M: GenerativeModel> {
    backend: Arc<M>,
    candidates: ModelCandidateList,
    params: DecodingParams,
}

impl<M: GenerativeModel> ModelInvoker<M> {
    pub fn new(backend: Arc<M>, candidates: ModelCandidateList, params: DecodingParams) -> Self {
        Self {
            backend,
            candidates,
            params,
        }
    }

    pub fn candidates(&self) -> &ModelCandidateList {
        &self.candidates
    }

    /// Try each candidate once, in order. Errors and blank text move on to
    /// the next candidate; the first non-blank text wins.
    pub async fn invoke(
        &self,
        prompt: &str,
        audio: &AudioPayload,
    ) -> Result<Invocation, AnalysisError> {
        let mut attempts = Vec::with_capacity(self.candidates.len());

        for model_id in self.candidates.iter() {
            match self
                .backend
                .generate(model_id, prompt, audio, &self.params)
                .await
            {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!(
                        "Model {} ({}) answered after {} failed attempt(s)",
                        model_id,
                        self.backend.provider_name(),
                        attempts.len()
                    );
                    attempts.push(InvocationAttempt::success(model_id, text.clone()));
                    return Ok(Invocation {
                        model_id: model_id.to_string(),
                        text,
                        attempts,
                    });
                }
                Ok(_) => {
                    tracing::warn!("Model {} returned an empty response", model_id);
                    attempts.push(InvocationAttempt::failure(model_id, "empty response"));
                }
                Err(e) => {
                    tracing::warn!("Model {} failed: {}", model_id, e);
                    attempts.push(InvocationAttempt::failure(model_id, e.to_string()));
                }
            }
        }

        Err(AnalysisError::AllCandidatesFailed { attempts })
    }
}
