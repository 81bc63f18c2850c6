//! Prompt - Per-request prompt configuration and the composed instruction
//!
//! Pure domain entities without infrastructure dependencies.

use serde::Serialize;

use crate::domain::entities::OrganizationProfile;
use crate::domain::value_objects::CallType;

/// Transient per-request prompt inputs
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub organization: OrganizationProfile,
    pub call_type: CallType,
    pub language_hint: Option<String>,
    pub additional_instructions: Option<String>,
}

impl PromptConfig {
    pub fn new(organization: OrganizationProfile, call_type: CallType) -> Self {
        Self {
            organization,
            call_type,
            language_hint: None,
            additional_instructions: None,
        }
    }

    pub fn with_language_hint(mut self, language_hint: Option<String>) -> Self {
        self.language_hint = language_hint;
        self
    }

    pub fn with_additional_instructions(mut self, instructions: Option<String>) -> Self {
        self.additional_instructions = instructions;
        self
    }
}

/// Final instruction string.
///
/// `text` already embeds `output_schema`; the schema is kept alongside so
/// callers can inspect the contract without re-parsing the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPrompt {
    pub text: String,
    pub output_schema: &'static str,
}

impl ComposedPrompt {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
