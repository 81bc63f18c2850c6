//! Result Normalizer
//!
//! Turns the model's raw text into a complete [`NormalizedAnalysis`].
//! Anything missing or mistyped falls back to its documented default;
//! only text that is not a JSON object at all is rejected.

use serde_json::{Map, Value};

use crate::domain::entities::{
    ActionItem, CategoryScores, Coaching, ConversationMetrics, CustomerProfile,
    ForcedSaleDetection, Insights, KeyMoment, MinutesOfMeeting, NormalizedAnalysis, Predictions,
    Segment,
};
use crate::domain::errors::AnalysisError;
use crate::domain::value_objects::{RiskLevel, Sentiment};

use super::output_schema::SENTINEL_PLACEHOLDERS;

const DEFAULT_LANGUAGE: &str = "unknown";
const DEFAULT_MOMENT_KIND: &str = "other";

pub struct ResultNormalizer;

impl ResultNormalizer {
    /// Parse and normalize raw model text, recording `model_id` as provenance.
    pub fn normalize(raw: &str, model_id: &str) -> Result<NormalizedAnalysis, AnalysisError> {
        let value = parse_object(raw).ok_or_else(|| AnalysisError::MalformedModelOutput {
            model_id: model_id.to_string(),
            raw: raw.to_string(),
        })?;
        let root = Fields(Some(&value));

        let analysis = NormalizedAnalysis {
            language: root.text_or("language", DEFAULT_LANGUAGE),
            duration: root.seconds("duration"),
            transcription: root.text("transcription"),
            summary: root.text("summary"),
            minutes_of_meeting: minutes(root.object("minutesOfMeeting")),
            insights: insights(root.object("insights")),
            conversation_metrics: metrics(root.object("conversationMetrics")),
            segments: root.objects("segments").map(segment).collect(),
            key_moments: root.objects("keyMoments").map(key_moment).collect(),
            coaching: coaching(root.object("coaching")),
            predictions: predictions(root.object("predictions")),
            customer_profile: customer_profile(root.object("customerProfile")),
            action_items: root.objects("actionItems").map(action_item).collect(),
            model_used: model_id.to_string(),
        };

        tracing::debug!(
            "Normalized analysis from {}: {} segments, {} red flags",
            model_id,
            analysis.segments.len(),
            analysis.coaching.red_flags.len()
        );

        Ok(analysis)
    }
}

/// Remove a surrounding markdown code fence (```json ... ```), if present.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// True for placeholder strings such as "None detected." or "N/A".
pub fn is_sentinel(item: &str) -> bool {
    let item = item.trim();
    item.is_empty()
        || SENTINEL_PLACEHOLDERS
            .iter()
            .any(|sentinel| item.eq_ignore_ascii_case(sentinel))
}

/// Drop placeholder entries, keeping genuine findings in order.
pub fn filter_sentinels(items: Vec<String>) -> Vec<String> {
    items.into_iter().filter(|item| !is_sentinel(item)).collect()
}

fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    let body = strip_code_fences(raw);
    let parsed = serde_json::from_str::<Value>(body).ok().or_else(|| {
        // Prose around the object: retry on the outermost braces
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        (start < end)
            .then(|| serde_json::from_str::<Value>(&body[start..=end]).ok())
            .flatten()
    })?;

    match parsed {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Lenient read-only view over an optional JSON object
#[derive(Clone, Copy)]
struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key)).filter(|v| !v.is_null())
    }

    fn object(&self, key: &str) -> Fields<'a> {
        Fields(self.get(key).and_then(Value::as_object))
    }

    fn objects(&self, key: &str) -> impl Iterator<Item = Fields<'a>> {
        self.get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|item| item.as_object().map(|map| Fields(Some(map))))
    }

    fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => String::new(),
        }
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        let text = self.text(key);
        if text.is_empty() {
            default.to_string()
        } else {
            text
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(value) => scalar_text(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    fn number(&self, key: &str) -> f64 {
        let n = match self.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite()).unwrap_or(0.0)
    }

    /// 0-100
    fn score(&self, key: &str) -> f64 {
        self.number(key).clamp(0.0, 100.0)
    }

    fn seconds(&self, key: &str) -> f64 {
        self.number(key).max(0.0)
    }

    fn count(&self, key: &str) -> u32 {
        self.number(key).max(0.0).round().min(u32::MAX as f64) as u32
    }

    fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            _ => false,
        }
    }

    fn sentiment(&self, key: &str) -> Sentiment {
        self.get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn risk(&self, key: &str, default: RiskLevel) -> RiskLevel {
        self.get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn minutes(f: Fields<'_>) -> MinutesOfMeeting {
    MinutesOfMeeting {
        attendees: f.list("attendees"),
        agenda: f.list("agenda"),
        discussion_points: f.list("discussionPoints"),
        decisions: f.list("decisions"),
        next_steps: f.list("nextSteps"),
    }
}

fn insights(f: Fields<'_>) -> Insights {
    Insights {
        sentiment: f.sentiment("sentiment"),
        sentiment_score: f.score("sentimentScore"),
        customer_intent: f.text("customerIntent"),
        topics: f.list("topics"),
        keywords: f.list("keywords"),
        pain_points: f.list("painPoints"),
        buying_signals: f.list("buyingSignals"),
    }
}

fn metrics(f: Fields<'_>) -> ConversationMetrics {
    ConversationMetrics {
        agent_talk_percentage: f.score("agentTalkPercentage"),
        customer_talk_percentage: f.score("customerTalkPercentage"),
        silence_percentage: f.score("silencePercentage"),
        interruptions: f.count("interruptions"),
        questions_asked: f.count("questionsAsked"),
        longest_monologue_seconds: f.seconds("longestMonologueSeconds"),
    }
}

fn segment(f: Fields<'_>) -> Segment {
    Segment {
        speaker: speaker_label(&f.text("speaker")),
        start_time: f.seconds("startTime"),
        end_time: f.seconds("endTime"),
        text: f.text("text"),
        sentiment: f.sentiment("sentiment"),
    }
}

fn speaker_label(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "a" | "agent" => "A".to_string(),
        "c" | "customer" => "C".to_string(),
        _ => raw.to_string(),
    }
}

fn key_moment(f: Fields<'_>) -> KeyMoment {
    KeyMoment {
        timestamp: f.seconds("timestamp"),
        kind: f.text_or("type", DEFAULT_MOMENT_KIND),
        description: f.text("description"),
        sentiment: f.sentiment("sentiment"),
    }
}

fn coaching(f: Fields<'_>) -> Coaching {
    let scores = f.object("categoryScores");
    let forced = f.object("forcedSaleDetection");

    Coaching {
        overall_score: f.score("overallScore"),
        category_scores: CategoryScores {
            rapport: scores.score("rapport"),
            discovery: scores.score("discovery"),
            product_knowledge: scores.score("productKnowledge"),
            objection_handling: scores.score("objectionHandling"),
            closing: scores.score("closing"),
            compliance: scores.score("compliance"),
            communication: scores.score("communication"),
            empathy: scores.score("empathy"),
        },
        strengths: f.list("strengths"),
        weaknesses: filter_sentinels(f.list("weaknesses")),
        missed_opportunities: filter_sentinels(f.list("missedOpportunities")),
        forced_sale_detection: ForcedSaleDetection {
            detected: forced.flag("detected"),
            severity: forced.risk("severity", RiskLevel::Low),
            indicators: filter_sentinels(forced.list("indicators")),
        },
        red_flags: filter_sentinels(f.list("redFlags")),
        compliance_issues: filter_sentinels(f.list("complianceIssues")),
        coaching_summary: f.text("coachingSummary"),
    }
}

fn predictions(f: Fields<'_>) -> Predictions {
    Predictions {
        conversion_probability: f.score("conversionProbability"),
        churn_risk: f.risk("churnRisk", RiskLevel::Medium),
        escalation_risk: f.risk("escalationRisk", RiskLevel::Low),
        customer_satisfaction: f.score("customerSatisfaction"),
        next_best_action: f.text("nextBestAction"),
    }
}

fn customer_profile(f: Fields<'_>) -> CustomerProfile {
    CustomerProfile {
        name: f.text("name"),
        communication_style: f.text("communicationStyle"),
        decision_stage: f.text("decisionStage"),
        needs: f.list("needs"),
        objections: f.list("objections"),
    }
}

fn action_item(f: Fields<'_>) -> ActionItem {
    ActionItem {
        task: f.text("task"),
        owner: f.text("owner"),
        due_date: f.text("dueDate"),
        priority: f.risk("priority", RiskLevel::Medium),
    }
}
