//! Text-completion port
//!
//! The opaque capability behind the prompt-backed answer source: hand a
//! prompt to some completion model, get raw text back. Which model, and
//! over what transport, is an infrastructure concern.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a completion request
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Request(String),
}

/// A text-completion capability
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run the prompt through the model and return the raw response text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
