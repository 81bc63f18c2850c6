//! Generative Model Port
//!
//! Abstract interface for a multimodal model that accepts an instruction
//! plus an audio payload and returns text. Implementations are swappable
//! (Gemini over REST in production, scripted fakes in tests).

use async_trait::async_trait;

use crate::domain::entities::{AudioPayload, DecodingParams};
use crate::domain::errors::DomainError;

/// Multimodal text generation backend
///
/// # Example
///
/// ```rust,ignore
/// use callsight::ports::GenerativeModel;
///
/// struct GeminiBackend { /* ... */ }
///
/// #[async_trait]
/// impl GenerativeModel for GeminiBackend {
///     async fn generate(&self, model_id: &str, prompt: &str, audio: &AudioPayload,
///         params: &DecodingParams) -> Result<String, DomainError> {
///         // Call generateContent with inline audio
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate text for `prompt` and `audio` using the named model.
    ///
    /// An `Ok` with empty text is treated by callers as a failed attempt.
    async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
        audio: &AudioPayload,
        params: &DecodingParams,
    ) -> Result<String, DomainError>;

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;
}
