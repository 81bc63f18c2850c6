//! Callsight API Client

use anyhow::{bail, Context, Result};
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Callsight
pub struct CallsightClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    pub ai_settings: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    pub record_id: Uuid,
    pub analysis: serde_json::Value,
    pub attempts: Vec<AttemptSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AttemptSummary {
    pub model_id: String,
    pub outcome: String,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptPreviewResponse {
    pub prompt: String,
    pub industry: String,
    pub call_type: String,
    pub strictness: String,
    pub length: usize,
}

#[derive(Debug, Deserialize)]
pub struct IndustrySummary {
    pub id: String,
    pub display_name: String,
    pub evaluation_criteria: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_settings: Option<serde_json::Value>,
}

/// Optional fields sent with an analysis upload
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    pub call_type: Option<String>,
    pub language: Option<String>,
    pub instructions: Option<String>,
}

impl CallsightClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Upload a recording for analysis
    pub async fn analyze(
        &self,
        org_id: &str,
        filename: &str,
        audio: Vec<u8>,
        options: AnalyzeOptions,
    ) -> Result<AnalysisResponse> {
        let url = format!("{}/callsight/orgs/{}/analyses", self.base_url, org_id);

        // Container is resolved server-side from the file name
        let part = multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")?;
        let mut form = multipart::Form::new().part("audio", part);
        if let Some(call_type) = options.call_type {
            form = form.text("call_type", call_type);
        }
        if let Some(language) = options.language {
            form = form.text("language", language);
        }
        if let Some(instructions) = options.instructions {
            form = form.text("instructions", instructions);
        }

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }

    /// Get an organization
    pub async fn get_org(&self, org_id: &str) -> Result<OrganizationResponse> {
        let url = format!("{}/callsight/orgs/{}", self.base_url, org_id);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }

    /// Create an organization
    pub async fn create_org(
        &self,
        request: &CreateOrganizationRequest,
    ) -> Result<OrganizationResponse> {
        let url = format!("{}/callsight/orgs", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }

    /// Replace an organization's AI settings
    pub async fn update_ai_settings(
        &self,
        org_id: &str,
        settings: &serde_json::Value,
    ) -> Result<OrganizationResponse> {
        let url = format!("{}/callsight/orgs/{}/ai-settings", self.base_url, org_id);
        let resp = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(settings)
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }

    /// Preview the analysis prompt for an organization
    pub async fn get_prompt(
        &self,
        org_id: &str,
        call_type: Option<&str>,
        language: Option<&str>,
    ) -> Result<PromptPreviewResponse> {
        let url = prompt_url(&self.base_url, org_id, call_type, language);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }

    /// List industry templates
    pub async fn list_industries(&self) -> Result<Vec<IndustrySummary>> {
        let url = format!("{}/callsight/industries", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Callsight API")?;

        read_json(resp).await
    }
}

fn prompt_url(
    base_url: &str,
    org_id: &str,
    call_type: Option<&str>,
    language: Option<&str>,
) -> String {
    let mut params = Vec::new();
    if let Some(ct) = call_type {
        params.push(format!("call_type={}", urlencoding::encode(ct)));
    }
    if let Some(lang) = language {
        params.push(format!("language={}", urlencoding::encode(lang)));
    }

    let mut url = format!("{}/callsight/orgs/{}/prompt", base_url, org_id);
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => bail!("{} ({}, {})", err.message, err.error, status),
            Err(_) => bail!("API error ({}): {}", status, body),
        }
    }

    resp.json().await.context("Failed to parse response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_url_encodes_query() {
        assert_eq!(
            prompt_url("http://h", "org", None, None),
            "http://h/callsight/orgs/org/prompt"
        );
        assert_eq!(
            prompt_url("http://h", "org", Some("follow_up"), Some("pt BR")),
            "http://h/callsight/orgs/org/prompt?call_type=follow_up&language=pt%20BR"
        );
    }
}
