//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Feedback is empty")]
    EmptyFeedback,

    /// Transport, auth, quota or response-shape failure of the model provider.
    #[error("Model request failed: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
