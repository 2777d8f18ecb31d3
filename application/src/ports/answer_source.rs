//! Answer source port
//!
//! Defines the interface for producing a fresh answer to a question.
//! Implementations may be cheap and random (canned list) or slow and
//! fallible (a remote text-completion model).

use async_trait::async_trait;
use eightball_domain::{Answer, Question};
use thiserror::Error;

/// Errors that can occur while producing an answer
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Completion request failed: {0}")]
    CompletionFailed(String),

    #[error("Answer source returned an empty response")]
    EmptyResponse,
}

/// Produces an answer for a question
///
/// Sources may be non-deterministic; the caller is responsible for any
/// memoization. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn answer(&self, question: &Question) -> Result<Answer, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        assert_eq!(
            SourceError::CompletionFailed("timeout".to_string()).to_string(),
            "Completion request failed: timeout"
        );
        assert_eq!(
            SourceError::EmptyResponse.to_string(),
            "Answer source returned an empty response"
        );
    }
}
