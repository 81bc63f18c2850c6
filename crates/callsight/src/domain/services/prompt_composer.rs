//! Prompt Composer
//!
//! Renders a resolved context into the analysis instruction. The output is
//! a pure function of its inputs: every list is rendered in stored order
//! and nothing depends on time, randomness, or hash iteration. Analyzing
//! the same call twice therefore sends byte-identical instructions.

use crate::domain::entities::{ComposedPrompt, CustomerContext, PromptConfig, ResolvedContext};
use crate::domain::value_objects::{CallType, PreferredTone, Strictness};

use super::output_schema::OUTPUT_SCHEMA;
use super::{ContextResolver, IndustryCatalog};

/// Score bands shared by every strictness tier: (min, max, label, meaning)
pub const SCORE_BANDS: [(u8, u8, &str, &str); 6] = [
    (90, 100, "Exceptional", "Textbook execution on every criterion; rare"),
    (80, 89, "Strong", "Clearly above expectations with only minor gaps"),
    (70, 79, "Competent", "Solid performance with some noticeable gaps"),
    (60, 69, "Developing", "Meets basic expectations; several areas need work"),
    (50, 59, "Weak", "Significant gaps in core skills or process"),
    (0, 49, "Poor", "Fundamental failures, compliance breaches, or harm to the customer"),
];

/// Fixed analysis directives appended after the rubric
pub const ANALYSIS_REQUIREMENTS: [&str; 13] = [
    "Transcribe the entire call verbatim. Do not paraphrase, summarize, or skip any part of the conversation.",
    "The summary must contain 3 to 5 bullet points, each starting with \"- \".",
    "Express every percentage, probability, and score as a number from 0 to 100, never as a fraction between 0 and 1.",
    "Identify between 3 and 8 key moments, each with a timestamp in seconds from the start of the recording.",
    "When a list has nothing to report (redFlags, complianceIssues, weaknesses, missedOpportunities, forcedSaleDetection.indicators), return an empty array []. Never write placeholder text such as \"None\", \"None detected\" or \"N/A\".",
    "Base every score and finding on evidence from the recording. Do not infer events that did not happen.",
    "overallScore must be consistent with categoryScores.",
    "duration is the length of the call in seconds.",
    "agentTalkPercentage, customerTalkPercentage and silencePercentage must add up to approximately 100.",
    "segments must cover the call in chronological order with startTime and endTime in seconds.",
    "Action items must be concrete and name an owner whenever one was mentioned.",
    "Use only the enumerated values shown in the schema for sentiment, risk, severity, and priority fields.",
    "Return only the JSON object, with no markdown fences, comments, or extra text.",
];

pub struct PromptComposer;

impl PromptComposer {
    /// Resolve `config.organization` against `catalog` and compose.
    pub fn compose_for(
        catalog: &IndustryCatalog,
        config: &PromptConfig,
        default_strictness: Strictness,
    ) -> ComposedPrompt {
        let context = ContextResolver::resolve(catalog, &config.organization, default_strictness);
        Self::compose(&context, config)
    }

    /// Render the instruction in fixed section order.
    pub fn compose(context: &ResolvedContext, config: &PromptConfig) -> ComposedPrompt {
        let mut sections: Vec<String> = Vec::with_capacity(16);

        sections.push(role_preamble(context));
        sections.push(industry_block(context));

        if let Some(org_context) = &context.organization_context {
            sections.push(format!(
                "## About {}\n{}",
                organization_label(context),
                org_context
            ));
        }
        if !context.products.is_empty() {
            sections.push(format!(
                "## Products & Services\nThe agent represents these offerings. Check that they were described accurately:\n{}",
                bullets(&context.products)
            ));
        }
        if !context.competitors.is_empty() {
            sections.push(format!(
                "## Competitor Awareness\nNote every mention of these competitors and how the agent positioned against them:\n{}",
                bullets(&context.competitors)
            ));
        }

        sections.push(compliance_block(context));

        if !context.terminology.is_empty() {
            sections.push(format!(
                "## Terminology\nExpect these terms and transcribe them exactly as spelled here: {}",
                context.terminology.join(", ")
            ));
        }
        if let Some(customer) = &context.customer_context {
            sections.push(customer_block(customer));
        }
        if let Some(focus) = call_type_block(config.call_type) {
            sections.push(focus.to_string());
        }

        sections.push(language_block(config.language_hint.as_deref()));
        sections.push(evaluation_focus_block(context));

        if let Some(instructions) = non_blank(config.additional_instructions.as_deref()) {
            sections.push(format!("## Additional Instructions\n{}", instructions));
        }
        if let Some(guidelines) = &context.guidelines {
            sections.push(format!("## Organization Guidelines\n{}", guidelines));
        }

        sections.push(format!(
            "## Output Format\nRespond with a single JSON object that follows this schema exactly. Use these field names, this nesting, and only the listed enum values:\n{}",
            OUTPUT_SCHEMA
        ));
        sections.push(rubric_block(context.strictness));

        let text = sections.join("\n\n");
        tracing::debug!(
            "Composed {} prompt for '{}' ({} chars, {} strictness)",
            config.call_type,
            context.industry.id,
            text.len(),
            context.strictness
        );

        ComposedPrompt {
            text,
            output_schema: OUTPUT_SCHEMA,
        }
    }
}

fn organization_label(context: &ResolvedContext) -> &str {
    if context.organization_name.is_empty() {
        "the organization"
    } else {
        &context.organization_name
    }
}

fn role_preamble(context: &ResolvedContext) -> String {
    let org = organization_label(context);
    let industry = &context.industry.display_name;
    let stance = match context.strictness {
        Strictness::Strict => "You are a demanding senior quality auditor. High scores must be earned through explicit evidence in the recording. Do not give the benefit of the doubt, do not round up, and treat every missed step as a deduction.",
        Strictness::Moderate => "You are a fair and balanced quality reviewer. Credit good practice where the recording shows it, and call out gaps clearly and specifically.",
        Strictness::Lenient => "You are a supportive performance coach. Recognize effort and improvement, but still report every issue you find.",
    };

    format!(
        "# Call Analysis Instructions\nYou are analyzing a recorded {industry} call for {org}. {stance}\nListen to the entire recording before producing your analysis."
    )
}

fn industry_block(context: &ResolvedContext) -> String {
    let industry = &context.industry;
    format!(
        "## Industry Context: {}\n{}\n\n### Evaluation Criteria\n{}\n\n### Compliance Requirements\n{}\n\n### Red Flag Indicators\n{}\n\n### Quality Markers\n{}",
        industry.display_name,
        industry.context,
        bullets(&industry.evaluation_criteria),
        bullets(&industry.compliance_requirements),
        bullets(&industry.red_flag_indicators),
        bullets(&industry.quality_markers),
    )
}

fn compliance_block(context: &ResolvedContext) -> String {
    format!(
        "## Compliance Checklist\nVerify each item below against the recording. Any compliance miss is a flagged issue: record it in coaching.complianceIssues and in coaching.redFlags, and reflect it in the compliance score.\n{}",
        numbered(&context.compliance)
    )
}

fn customer_block(customer: &CustomerContext) -> String {
    let mut lines = vec!["## Customer Context".to_string()];
    if !customer.typical_profiles.is_empty() {
        lines.push(format!(
            "Typical customer profiles:\n{}",
            bullets(&customer.typical_profiles)
        ));
    }
    if !customer.common_issues.is_empty() {
        lines.push(format!(
            "Common customer issues:\n{}",
            bullets(&customer.common_issues)
        ));
    }
    if let Some(tone) = customer.preferred_tone {
        let expectation = match tone {
            PreferredTone::Formal => "courteous, formal language with titles and no slang",
            PreferredTone::Friendly => "warm, conversational language that builds rapport",
            PreferredTone::Professional => "clear, polite, business-like language",
        };
        lines.push(format!(
            "Preferred tone: {tone}. The agent is expected to use {expectation}. Deviations count against communication."
        ));
    }
    lines.join("\n")
}

fn call_type_block(call_type: CallType) -> Option<&'static str> {
    match call_type {
        CallType::Sales => Some(
            "## Call Focus: Sales\n- Assess needs discovery and qualification before any pitch\n- Evaluate how the value proposition was tied to the customer's stated needs\n- Assess objection handling and whether objections were resolved or avoided\n- Check for a clear close or a committed next step\n- Detect forced-sale behavior: pressure tactics, false urgency, or ignoring a clear no",
        ),
        CallType::Support => Some(
            "## Call Focus: Support\n- Assess problem identification and troubleshooting steps\n- Evaluate first-contact resolution and accuracy of the fix\n- Check empathy and acknowledgement of customer frustration\n- Verify the agent confirmed the issue was resolved or set a clear follow-up\n- Note escalation handling and any transfer experience",
        ),
        CallType::Consultation => Some(
            "## Call Focus: Consultation\n- Assess depth of questioning and understanding of the customer's situation\n- Evaluate the quality and suitability of advice given\n- Check that options, trade-offs, and risks were explained\n- Verify the customer's questions were answered completely\n- Note whether a recommendation and next step were agreed",
        ),
        CallType::FollowUp => Some(
            "## Call Focus: Follow-up\n- Check the agent referenced the previous interaction accurately\n- Assess progress on commitments made earlier\n- Evaluate handling of new concerns raised since the last contact\n- Verify momentum toward a decision or resolution\n- Note whether a further next step was scheduled",
        ),
        CallType::General => None,
    }
}

fn language_block(language_hint: Option<&str>) -> String {
    let detection = match non_blank(language_hint) {
        Some(hint) => format!(
            "- The call is expected to be in {hint}. Treat this as a hint only and report the language actually spoken."
        ),
        None => "- Detect the spoken language from the recording.".to_string(),
    };

    format!(
        "## Language Handling\n{detection}\n- Transcribe in the language actually spoken. Do not translate the transcription.\n- If speakers switch languages (code-switching), transcribe each part in the language used and note the switch in the summary.\n- Label every turn in the transcription and every segment with A: for the agent and C: for the customer.\n- Write all analysis fields other than the transcription in English."
    )
}

fn evaluation_focus_block(context: &ResolvedContext) -> String {
    format!(
        "## Evaluation Focus\nPrioritize these areas, in order:\n{}\n\nCommon objections in this industry. If any were raised, assess how each was handled:\n{}",
        numbered(&context.focus_areas),
        bullets(&context.industry.common_objections)
    )
}

fn rubric_block(strictness: Strictness) -> String {
    let table = SCORE_BANDS
        .iter()
        .map(|(min, max, label, meaning)| {
            if *min == 0 {
                format!("- Below {}: {} - {}", max + 1, label, meaning)
            } else {
                format!("- {}-{}: {} - {}", min, max, label, meaning)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let (low, high) = strictness.typical_band();
    let calibration = match strictness {
        Strictness::Strict => "Scores of 80 or above are reserved for calls with clear evidence of excellence on every criterion. When in doubt, score lower.",
        Strictness::Moderate => "Scores of 80 or above require evidence of strong performance on most criteria.",
        Strictness::Lenient => "Reward genuine effort, but a call with compliance misses must not score above 69.",
    };

    format!(
        "## Scoring Rubric ({strictness})\n{table}\n\nA typical, average call MUST score between {low} and {high}. Do not inflate scores. {calibration}\n\n## Analysis Requirements\n{}",
        numbered(&ANALYSIS_REQUIREMENTS)
    )
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AiSettings, OrganizationProfile, ScoringPreference};

    fn organization(settings: AiSettings) -> OrganizationProfile {
        OrganizationProfile::new("Acme Insurance".to_string(), "insurance".to_string())
            .with_ai_settings(settings)
    }

    fn full_settings() -> AiSettings {
        AiSettings {
            context: Some("Acme sells term life policies over the phone.".to_string()),
            products: vec!["Term Life 20".to_string(), "Critical Illness Rider".to_string()],
            competitors: vec!["Globex Life".to_string()],
            guidelines: Some("Always offer a callback.".to_string()),
            compliance_scripts: vec!["Read the call recording disclosure".to_string()],
            custom_terminology: vec!["Acme Shield".to_string()],
            scoring: Some(ScoringPreference {
                strictness: Some(Strictness::Moderate),
                focus_areas: vec!["Disclosure of exclusions".to_string()],
            }),
            customer_context: Some(CustomerContext {
                typical_profiles: vec!["Young families".to_string()],
                common_issues: vec!["Premium affordability".to_string()],
                preferred_tone: Some(PreferredTone::Formal),
            }),
        }
    }

    fn compose(settings: AiSettings, call_type: CallType) -> ComposedPrompt {
        let config = PromptConfig::new(organization(settings), call_type)
            .with_language_hint(Some("Hindi".to_string()))
            .with_additional_instructions(Some("Pay attention to hold times.".to_string()));
        PromptComposer::compose_for(&IndustryCatalog::builtin(), &config, Strictness::Strict)
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing section: {needle}"))
    }

    #[test]
    fn test_compose_is_deterministic() {
        let first = compose(full_settings(), CallType::Sales);
        let second = compose(full_settings(), CallType::Sales);
        assert_eq!(first, second);
        assert_eq!(first.text.as_bytes(), second.text.as_bytes());
    }

    #[test]
    fn test_identical_config_from_fresh_profiles_is_identical() {
        let mut older = organization(full_settings());
        older.created_at -= chrono::Duration::days(30);
        older.updated_at = older.created_at;
        let newer = organization(full_settings());
        assert_ne!(older.id, newer.id);

        // Ids and timestamps must not leak into the prompt
        let catalog = IndustryCatalog::builtin();
        let a = PromptComposer::compose_for(
            &catalog,
            &PromptConfig::new(older, CallType::Support),
            Strictness::Strict,
        );
        let b = PromptComposer::compose_for(
            &catalog,
            &PromptConfig::new(newer, CallType::Support),
            Strictness::Strict,
        );
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let prompt = compose(full_settings(), CallType::Sales).text;
        let order = [
            "# Call Analysis Instructions",
            "## Industry Context: Insurance",
            "## About Acme Insurance",
            "## Products & Services",
            "## Competitor Awareness",
            "## Compliance Checklist",
            "## Terminology",
            "## Customer Context",
            "## Call Focus: Sales",
            "## Language Handling",
            "## Evaluation Focus",
            "## Additional Instructions",
            "## Organization Guidelines",
            "## Output Format",
            "## Scoring Rubric (moderate)",
            "## Analysis Requirements",
        ];
        let positions: Vec<usize> = order.iter().map(|s| position(&prompt, s)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let prompt = compose(AiSettings::default(), CallType::General).text;
        for absent in [
            "## About",
            "## Products & Services",
            "## Competitor Awareness",
            "## Customer Context",
            "## Call Focus",
            "## Organization Guidelines",
        ] {
            assert!(!prompt.contains(absent), "unexpected section: {absent}");
        }
        assert!(prompt.contains("## Compliance Checklist"));
        assert!(prompt.contains("## Scoring Rubric (strict)"));
    }

    #[test]
    fn test_schema_is_reproduced_verbatim() {
        let prompt = compose(full_settings(), CallType::Consultation);
        assert!(prompt.text.contains(OUTPUT_SCHEMA));
        assert_eq!(prompt.output_schema, OUTPUT_SCHEMA);
    }

    #[test]
    fn test_compliance_block_merges_and_flags() {
        let prompt = compose(full_settings(), CallType::Sales).text;
        let block = &prompt[position(&prompt, "## Compliance Checklist")..];
        assert!(block.contains("Any compliance miss is a flagged issue"));
        assert!(block.contains("Disclose material exclusions and limitations"));
        assert!(block.contains("Read the call recording disclosure"));
    }

    #[test]
    fn test_strictness_changes_preamble_and_band() {
        let mut settings = full_settings();
        settings.scoring = Some(ScoringPreference {
            strictness: Some(Strictness::Strict),
            focus_areas: vec![],
        });
        let strict = compose(settings.clone(), CallType::Sales).text;

        settings.scoring = Some(ScoringPreference {
            strictness: Some(Strictness::Lenient),
            focus_areas: vec![],
        });
        let lenient = compose(settings, CallType::Sales).text;

        assert!(strict.contains("demanding senior quality auditor"));
        assert!(strict.contains("MUST score between 50 and 69"));
        assert!(lenient.contains("supportive performance coach"));
        assert!(lenient.contains("MUST score between 70 and 79"));
        assert_ne!(strict, lenient);
    }

    #[test]
    fn test_rubric_has_six_bands_and_thirteen_requirements() {
        let prompt = compose(AiSettings::default(), CallType::General).text;
        let rubric = &prompt[position(&prompt, "## Scoring Rubric")..];
        assert!(rubric.contains("- 90-100: Exceptional"));
        assert!(rubric.contains("- Below 50: Poor"));
        assert!(rubric.contains("13. Return only the JSON object"));
        assert!(!rubric.contains("14. "));
    }

    #[test]
    fn test_language_block_speaker_labels_and_hint() {
        let prompt = compose(AiSettings::default(), CallType::General).text;
        assert!(prompt.contains("A: for the agent and C: for the customer"));
        assert!(prompt.contains("expected to be in Hindi"));
        assert!(prompt.contains("code-switching"));

        let config = PromptConfig::new(organization(AiSettings::default()), CallType::General);
        let prompt =
            PromptComposer::compose_for(&IndustryCatalog::builtin(), &config, Strictness::Strict);
        assert!(prompt.text.contains("Detect the spoken language"));
    }

    #[test]
    fn test_each_call_type_has_distinct_focus() {
        let blocks: Vec<_> = [
            CallType::Sales,
            CallType::Support,
            CallType::Consultation,
            CallType::FollowUp,
        ]
        .into_iter()
        .map(|t| call_type_block(t).unwrap())
        .collect();
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(call_type_block(CallType::General).is_none());
    }
}
