//! NormalizedAnalysis - Canonical call analysis report
//!
//! Every field has a documented default (see the `Default` impls); the
//! report is only ever built by the result normalizer, which guarantees
//! completeness and sentinel-free flagged-issue lists.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RiskLevel, Sentiment};

/// Fully populated analysis report with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAnalysis {
    /// Spoken language, `"unknown"` when not reported
    pub language: String,
    /// Call duration in seconds
    pub duration: f64,
    pub transcription: String,
    pub summary: String,
    pub minutes_of_meeting: MinutesOfMeeting,
    pub insights: Insights,
    pub conversation_metrics: ConversationMetrics,
    pub segments: Vec<Segment>,
    pub key_moments: Vec<KeyMoment>,
    pub coaching: Coaching,
    pub predictions: Predictions,
    pub customer_profile: CustomerProfile,
    pub action_items: Vec<ActionItem>,
    /// Model candidate that produced this report
    pub model_used: String,
}

impl Default for NormalizedAnalysis {
    fn default() -> Self {
        Self {
            language: "unknown".to_string(),
            duration: 0.0,
            transcription: String::new(),
            summary: String::new(),
            minutes_of_meeting: MinutesOfMeeting::default(),
            insights: Insights::default(),
            conversation_metrics: ConversationMetrics::default(),
            segments: Vec::new(),
            key_moments: Vec::new(),
            coaching: Coaching::default(),
            predictions: Predictions::default(),
            customer_profile: CustomerProfile::default(),
            action_items: Vec::new(),
            model_used: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesOfMeeting {
    pub attendees: Vec<String>,
    pub agenda: Vec<String>,
    pub discussion_points: Vec<String>,
    pub decisions: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub sentiment: Sentiment,
    /// 0-100
    pub sentiment_score: f64,
    pub customer_intent: String,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    pub pain_points: Vec<String>,
    pub buying_signals: Vec<String>,
}

/// Talk-time metrics; percentages are 0-100, never fractions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMetrics {
    pub agent_talk_percentage: f64,
    pub customer_talk_percentage: f64,
    pub silence_percentage: f64,
    pub interruptions: u32,
    pub questions_asked: u32,
    pub longest_monologue_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// `A` for agent, `C` for customer
    pub speaker: String,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMoment {
    pub timestamp: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coaching {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missed_opportunities: Vec<String>,
    pub forced_sale_detection: ForcedSaleDetection,
    pub red_flags: Vec<String>,
    pub compliance_issues: Vec<String>,
    pub coaching_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub rapport: f64,
    pub discovery: f64,
    pub product_knowledge: f64,
    pub objection_handling: f64,
    pub closing: f64,
    pub compliance: f64,
    pub communication: f64,
    pub empathy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForcedSaleDetection {
    pub detected: bool,
    pub severity: RiskLevel,
    pub indicators: Vec<String>,
}

impl Default for ForcedSaleDetection {
    fn default() -> Self {
        Self {
            detected: false,
            severity: RiskLevel::Low,
            indicators: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predictions {
    /// 0-100
    pub conversion_probability: f64,
    pub churn_risk: RiskLevel,
    pub escalation_risk: RiskLevel,
    /// 0-100
    pub customer_satisfaction: f64,
    pub next_best_action: String,
}

impl Default for Predictions {
    fn default() -> Self {
        Self {
            conversion_probability: 0.0,
            churn_risk: RiskLevel::Medium,
            escalation_risk: RiskLevel::Low,
            customer_satisfaction: 0.0,
            next_best_action: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub name: String,
    pub communication_style: String,
    pub decision_stage: String,
    pub needs: Vec<String>,
    pub objections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    pub due_date: String,
    pub priority: RiskLevel,
}

impl Default for ActionItem {
    fn default() -> Self {
        Self {
            task: String::new(),
            owner: String::new(),
            due_date: String::new(),
            priority: RiskLevel::Medium,
        }
    }
}
