//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — adapters map into these.

use crate::domain::DomainError;
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder shown for an expected field the model left out.
pub const PLACEHOLDER: &str = "N/A";

/// Prefix of every failed model call's displayable text.
pub const API_ERROR_PREFIX: &str = "API call error: ";

/// Free-text employee feedback. Never blank; stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackInput(String);

impl FeedbackInput {
    /// Accepts any text with at least one non-whitespace character.
    /// The text itself is kept untouched (no trimming, quotes included).
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyFeedback);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw outcome of one model call.
///
/// Both variants are displayable; a failure is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResponse {
    /// Text returned by the provider, unchanged.
    Success(String),
    /// `"API call error: <details>"`.
    Failure(String),
}

impl ModelResponse {
    /// Wrap failure details into the displayable `API call error:` form.
    pub fn failure(details: impl fmt::Display) -> Self {
        Self::Failure(format!("{}{}", API_ERROR_PREFIX, details))
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Closed set of risk levels the prompt asks for. Display hint only:
/// the raw value is never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttritionRisk {
    No,
    Low,
    Medium,
    High,
    Unknown,
}

impl AttritionRisk {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "no" => Self::No,
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

/// Parsed model answer. Best-effort key lookup over whatever object came back.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    fields: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw `attrition_risk` text, or `N/A`.
    pub fn attrition_risk(&self) -> String {
        self.text_field("attrition_risk")
    }

    pub fn risk_level(&self) -> AttritionRisk {
        AttritionRisk::parse(&self.attrition_risk())
    }

    /// `explanation`, or `N/A`.
    pub fn explanation(&self) -> String {
        self.text_field("explanation")
    }

    /// `engagement_strategies` in order; empty when absent.
    ///
    /// A bare string counts as one strategy, non-string items are shown as
    /// compact JSON, and any other shape yields no strategies.
    pub fn engagement_strategies(&self) -> Vec<String> {
        match self.fields.get("engagement_strategies") {
            Some(Value::Array(items)) => items.iter().map(value_to_text).collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    fn text_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => PLACEHOLDER.to_string(),
            Some(value) => value_to_text(value),
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Everything one "Analyze" action produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub raw: ModelResponse,
    /// `None` when no JSON object could be recovered from `raw`.
    pub parsed: Option<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_from(value: Value) -> AnalysisResult {
        match value {
            Value::Object(map) => AnalysisResult::new(map),
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_feedback_rejects_blank() {
        assert!(matches!(
            FeedbackInput::new(""),
            Err(DomainError::EmptyFeedback)
        ));
        assert!(matches!(
            FeedbackInput::new("  \n\t "),
            Err(DomainError::EmptyFeedback)
        ));
    }

    #[test]
    fn test_feedback_kept_verbatim() {
        let text = "  I said \"enough\" twice.\n";
        let feedback = FeedbackInput::new(text).unwrap();
        assert_eq!(feedback.as_str(), text);
    }

    #[test]
    fn test_model_response_failure_prefix() {
        let resp = ModelResponse::failure("connection refused");
        assert!(resp.is_failure());
        assert_eq!(resp.as_text(), "API call error: connection refused");
        assert_eq!(resp.to_string(), resp.as_text());
    }

    #[test]
    fn test_attrition_risk_parse() {
        assert_eq!(AttritionRisk::parse("HIGH"), AttritionRisk::High);
        assert_eq!(AttritionRisk::parse(" medium "), AttritionRisk::Medium);
        assert_eq!(AttritionRisk::parse("no"), AttritionRisk::No);
        assert_eq!(AttritionRisk::parse("extreme"), AttritionRisk::Unknown);
    }

    #[test]
    fn test_full_result_accessors() {
        let result = result_from(json!({
            "attrition_risk": "low",
            "explanation": "Happy with the team",
            "engagement_strategies": ["Mentoring", "Flexible hours", "Recognition"]
        }));
        assert_eq!(result.attrition_risk(), "low");
        assert_eq!(result.risk_level(), AttritionRisk::Low);
        assert_eq!(result.explanation(), "Happy with the team");
        assert_eq!(
            result.engagement_strategies(),
            vec!["Mentoring", "Flexible hours", "Recognition"]
        );
    }

    #[test]
    fn test_missing_keys_degrade_to_placeholders() {
        let result = result_from(json!({"unrelated": 1}));
        assert_eq!(result.attrition_risk(), PLACEHOLDER);
        assert_eq!(result.explanation(), PLACEHOLDER);
        assert!(result.engagement_strategies().is_empty());
        assert_eq!(result.risk_level(), AttritionRisk::Unknown);
    }

    #[test]
    fn test_odd_shapes_are_tolerated() {
        let result = result_from(json!({
            "attrition_risk": null,
            "explanation": 42,
            "engagement_strategies": "Only one idea"
        }));
        assert_eq!(result.attrition_risk(), PLACEHOLDER);
        assert_eq!(result.explanation(), "42");
        assert_eq!(result.engagement_strategies(), vec!["Only one idea"]);

        let result = result_from(json!({
            "engagement_strategies": ["Talk", {"step": 2}, 3]
        }));
        assert_eq!(
            result.engagement_strategies(),
            vec!["Talk", r#"{"step":2}"#, "3"]
        );

        let result = result_from(json!({"engagement_strategies": {"a": 1}}));
        assert!(result.engagement_strategies().is_empty());
    }
}
