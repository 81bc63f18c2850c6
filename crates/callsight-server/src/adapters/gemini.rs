//! Gemini backend for multimodal call analysis.
//!
//! Sends the instruction and the recording (inline, base64) to
//! `generateContent` and returns the text of the first candidate.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use callsight::domain::{AudioPayload, DecodingParams, DomainError};
use callsight::ports::GenerativeModel;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST client implementing [`GenerativeModel`]
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model_id: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model_id)
    }

    async fn perform(
        &self,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        // The key travels in a header so transport errors, which echo the
        // request URL, never carry it.
        let response = self
            .client
            .post(self.endpoint(model_id))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| GeminiError::RequestFailed(err.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GeminiError::ParseError(err.without_url().to_string()))?;

        extract_text(&payload).ok_or_else(|| GeminiError::NoContent(block_reason(&payload)))
    }
}

#[async_trait]
impl GenerativeModel for GeminiBackend {
    async fn generate(
        &self,
        model_id: &str,
        prompt: &str,
        audio: &AudioPayload,
        params: &DecodingParams,
    ) -> Result<String, DomainError> {
        let request = GenerateContentRequest::new(prompt, audio, params);
        self.perform(model_id, &request)
            .await
            .map_err(|e| DomainError::ExternalService(format!("{}: {}", model_id, e)))
    }

    fn provider_name(&self) -> &str {
        "google"
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: &str, audio: &AudioPayload, params: &DecodingParams) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: audio.format.mime_type().to_string(),
                            data: STANDARD.encode(&audio.bytes),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_k: params.top_k,
                max_output_tokens: params.max_output_tokens,
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

/// Gemini error types
#[derive(Debug, Clone, thiserror::Error)]
enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("No text in response ({0})")]
    NoContent(String),
}

// ============================================
// Helper Functions
// ============================================

/// Concatenated text parts of the first candidate
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn block_reason(root: &Value) -> String {
    root.get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .or_else(|| {
            root.get("candidates")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("finishReason"))
        })
        .and_then(|r| r.as_str())
        .unwrap_or("no candidates")
        .to_string()
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited(message);
    }

    GeminiError::ApiError {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsight::domain::AudioFormat;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let audio = AudioPayload {
            bytes: b"RIFF".to_vec(),
            format: AudioFormat::Wav,
        };
        let request = GenerateContentRequest::new("Analyze", &audio, &DecodingParams::greedy(8192));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "Analyze");
        let inline = &value["contents"][0]["parts"][1]["inline_data"];
        assert_eq!(inline["mime_type"], "audio/wav");
        assert_eq!(inline["data"], "UklGRg==");

        let config = &value["generationConfig"];
        assert_eq!(config["temperature"], 0.0);
        assert_eq!(config["topK"], 1);
        assert_eq!(config["maxOutputTokens"], 8192);
        assert_eq!(config["responseMimeType"], "application/json");
    }

    #[test]
    fn test_endpoint_leaves_key_out_of_url() {
        let backend = GeminiBackend::new("SECRET-KEY-123", "https://api.example/v1beta/models/");
        let url = backend.endpoint("gemini-2.5-flash");
        assert_eq!(
            url,
            "https://api.example/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(!url.contains("SECRET-KEY-123"));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_carry_key() {
        // Nothing listens on port 1, so the request fails before any response
        let backend = GeminiBackend::new("SECRET-KEY-123", "http://127.0.0.1:1/v1beta/models");
        let audio = AudioPayload {
            bytes: b"RIFF".to_vec(),
            format: AudioFormat::Wav,
        };

        let err = backend
            .generate("m1", "Analyze", &audio, &DecodingParams::greedy(16))
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("m1: Request failed"), "unexpected error: {text}");
        assert!(!text.contains("SECRET-KEY-123"), "key leaked: {text}");
    }

    #[test]
    fn test_extract_text_joins_first_candidate_parts() {
        let payload = json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"language\":"}, {"text": " \"English\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        });
        assert_eq!(
            extract_text(&payload).as_deref(),
            Some("{\"language\": \"English\"}")
        );
    }

    #[test]
    fn test_extract_text_missing_or_blank() {
        assert_eq!(extract_text(&json!({})), None);
        let blank = json!({"candidates": [{"content": {"parts": [{"text": "  "}]}, "finishReason": "SAFETY"}]});
        assert_eq!(extract_text(&blank), None);
        assert_eq!(block_reason(&blank), "SAFETY");
    }

    #[test]
    fn test_map_http_error() {
        let body = r#"{"error": {"code": 400, "message": "Unsupported MIME type"}}"#.to_string();
        match map_http_error(StatusCode::BAD_REQUEST, body) {
            GeminiError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Unsupported MIME type");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            map_http_error(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string()),
            GeminiError::RateLimited(_)
        ));
    }
}
