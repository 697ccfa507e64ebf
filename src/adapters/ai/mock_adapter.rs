//! Mock AI adapter for running without API calls.
//!
//! Returns a hardcoded answer for development and demos.

use crate::domain::DomainError;
use crate::ports::LanguageModelPort;
use std::time::Duration;
use tracing::info;

/// Mock language model.
///
/// Returns a predetermined, fenced JSON answer without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a mock adapter with the given simulated delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

#[async_trait::async_trait]
impl LanguageModelPort for MockAiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] Simulating model call");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let answer = serde_json::json!({
            "attrition_risk": "medium",
            "explanation": format!(
                "[MOCK] Simulated analysis of a {}-character prompt. \
                 Configure a real provider key to get an actual assessment.",
                prompt.chars().count()
            ),
            "engagement_strategies": [
                "[MOCK] Schedule a one-on-one to discuss workload",
                "[MOCK] Clarify growth and promotion paths",
                "[MOCK] Recognize recent contributions publicly"
            ]
        });

        Ok(format!("```json\n{:#}\n```", answer))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
