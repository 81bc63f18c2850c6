//! Output schema contract
//!
//! The JSON shape the model is told to emit. It is reproduced verbatim in
//! every prompt and its keys are exactly the keys the result normalizer
//! reads.

/// Canonical output-schema contract. Valid JSON; string values describe the
/// expected type or enumerate allowed values separated by `|`.
pub const OUTPUT_SCHEMA: &str = r#"{
  "language": "ISO language name of the call, e.g. English, Hindi, Spanish",
  "duration": 0,
  "transcription": "Full verbatim transcript, one line per turn, prefixed A: or C:",
  "summary": "3-5 bullet points, each starting with - ",
  "minutesOfMeeting": {
    "attendees": ["string"],
    "agenda": ["string"],
    "discussionPoints": ["string"],
    "decisions": ["string"],
    "nextSteps": ["string"]
  },
  "insights": {
    "sentiment": "Positive|Neutral|Negative|Mixed",
    "sentimentScore": 0,
    "customerIntent": "string",
    "topics": ["string"],
    "keywords": ["string"],
    "painPoints": ["string"],
    "buyingSignals": ["string"]
  },
  "conversationMetrics": {
    "agentTalkPercentage": 0,
    "customerTalkPercentage": 0,
    "silencePercentage": 0,
    "interruptions": 0,
    "questionsAsked": 0,
    "longestMonologueSeconds": 0
  },
  "segments": [
    {
      "speaker": "A|C",
      "startTime": 0,
      "endTime": 0,
      "text": "string",
      "sentiment": "Positive|Neutral|Negative|Mixed"
    }
  ],
  "keyMoments": [
    {
      "timestamp": 0,
      "type": "objection|buying_signal|commitment|escalation|compliance|rapport|other",
      "description": "string",
      "sentiment": "Positive|Neutral|Negative|Mixed"
    }
  ],
  "coaching": {
    "overallScore": 0,
    "categoryScores": {
      "rapport": 0,
      "discovery": 0,
      "productKnowledge": 0,
      "objectionHandling": 0,
      "closing": 0,
      "compliance": 0,
      "communication": 0,
      "empathy": 0
    },
    "strengths": ["string"],
    "weaknesses": ["string"],
    "missedOpportunities": ["string"],
    "forcedSaleDetection": {
      "detected": false,
      "severity": "low|medium|high",
      "indicators": ["string"]
    },
    "redFlags": ["string"],
    "complianceIssues": ["string"],
    "coachingSummary": "string"
  },
  "predictions": {
    "conversionProbability": 0,
    "churnRisk": "low|medium|high",
    "escalationRisk": "low|medium|high",
    "customerSatisfaction": 0,
    "nextBestAction": "string"
  },
  "customerProfile": {
    "name": "string",
    "communicationStyle": "string",
    "decisionStage": "string",
    "needs": ["string"],
    "objections": ["string"]
  },
  "actionItems": [
    {
      "task": "string",
      "owner": "string",
      "dueDate": "string",
      "priority": "low|medium|high"
    }
  ]
}"#;

/// Placeholder strings the model emits instead of an empty list.
///
/// Compared case-insensitively after trimming.
pub const SENTINEL_PLACEHOLDERS: &[&str] = &[
    "none",
    "none detected",
    "none detected.",
    "n/a",
    "no red flags",
    "no red flags detected",
    "no red flags detected.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_valid_json_object() {
        let value: serde_json::Value = serde_json::from_str(OUTPUT_SCHEMA).unwrap();
        assert!(value.is_object());
    }
}
