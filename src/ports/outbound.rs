//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Generative language model. One prompt in, one text out.
#[async_trait::async_trait]
pub trait LanguageModelPort: Send + Sync {
    /// Send `prompt` and return the generated text unchanged.
    ///
    /// # Errors
    /// `DomainError::Model` on transport, auth, quota or response-shape failure.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Short provider/model label for logs and the UI header.
    fn describe(&self) -> String;
}
