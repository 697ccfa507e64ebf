//! Analysis service. Orchestrates the feedback analysis workflow.
//!
//! Builds the HR-analyst prompt, calls the language model, and recovers the
//! structured answer from whatever text comes back.

use crate::domain::{
    AnalysisOutcome, AnalysisResult, FeedbackInput, ModelResponse, clean_and_parse_json,
};
use crate::ports::LanguageModelPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for LLM-powered feedback analysis.
///
/// Orchestrates the flow:
/// 1. Embed the feedback in the fixed analyst prompt
/// 2. Send it to the model (failures become displayable text)
/// 3. Extract the JSON answer from the raw response
pub struct AnalysisService {
    model: Arc<dyn LanguageModelPort>,
}

impl AnalysisService {
    /// Create a new analysis service.
    ///
    /// # Arguments
    /// * `model` - Language model implementation (Gemini, OpenAI, Mock, etc.)
    pub fn new(model: Arc<dyn LanguageModelPort>) -> Self {
        Self { model }
    }

    pub fn model_label(&self) -> String {
        self.model.describe()
    }

    /// Build the analyst prompt. Feedback is embedded verbatim.
    pub fn build_prompt(feedback: &FeedbackInput) -> String {
        format!(
            r#"
You are an HR analyst AI assistant.

Analyze the following employee feedback and provide a JSON response with these fields:

1. attrition_risk: one of [no, low, medium, high]
2. explanation: brief explanation for the risk level
3. engagement_strategies: a list of 3 practical strategies to improve employee engagement and reduce attrition risk

Employee Feedback:
"""{}"""

Respond ONLY in JSON format.
"#,
            feedback.as_str()
        )
    }

    /// Call the model with the analyst prompt.
    ///
    /// Never fails: any model error is returned as
    /// `ModelResponse::Failure("API call error: ...")`.
    pub async fn analyze_feedback(&self, feedback: &FeedbackInput) -> ModelResponse {
        let prompt = Self::build_prompt(feedback);
        info!(
            model = %self.model.describe(),
            feedback_len = feedback.as_str().len(),
            "sending feedback to model"
        );

        match self.model.generate(&prompt).await {
            Ok(text) => {
                debug!(response_len = text.len(), "received model response");
                ModelResponse::Success(text)
            }
            Err(e) => {
                warn!(error = %e, "model call failed");
                ModelResponse::failure(e)
            }
        }
    }

    /// Recover the structured answer from a raw response, if any.
    pub fn extract(raw: &ModelResponse) -> Option<AnalysisResult> {
        clean_and_parse_json(raw.as_text()).map(AnalysisResult::new)
    }

    /// One full "Analyze" action: call the model, then extract.
    pub async fn run(&self, feedback: &FeedbackInput) -> AnalysisOutcome {
        let raw = self.analyze_feedback(feedback).await;
        let parsed = Self::extract(&raw);
        if parsed.is_none() {
            warn!(failed_call = raw.is_failure(), "no JSON object in model response");
        } else {
            info!("analysis complete");
        }
        AnalysisOutcome { raw, parsed }
    }
}
