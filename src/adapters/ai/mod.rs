//! AI adapter module. Implements LanguageModelPort for LLM providers.
//!
//! Provides Gemini and OpenAI-compatible adapters plus a mock adapter for offline use.

pub mod gemini_adapter;
pub mod mock_adapter;
pub mod openai_adapter;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockAiAdapter;
pub use openai_adapter::OpenAiAdapter;

use serde::Deserialize;

/// Keep error bodies short enough for a single UI line.
pub(crate) fn truncate_body(text: &str) -> String {
    text.chars().take(200).collect()
}

/// `{"error": {"message": ...}}` returned with non-2xx statuses by both providers.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Human-readable details of a failed call: the provider's `error.message`
/// when present, else the truncated body.
///
/// Braces are removed so the resulting failure text never contains a JSON
/// object for the lenient extractor to pick up.
pub(crate) fn error_details(body: &str) -> String {
    let details = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| truncate_body(body));
    details.replace(['{', '}'], "").trim().to_string()
}
