//! Completion-backed answer source
//!
//! Wraps an opaque [`CompletionClient`] with the 8 ball prompt and the
//! response cleanup the tutorials apply: trim, then strip the `Answer:`
//! prefix the model was told to emit.

use async_trait::async_trait;
use eightball_application::{AnswerSource, CompletionClient, SourceError};
use eightball_domain::{Answer, EightBallPrompt, Question};
use std::sync::Arc;
use tracing::debug;

/// Answer source delegating to a text-completion model.
///
/// Prompt construction and prefix-stripping live here (via
/// [`EightBallPrompt`]); the resolver never sees prompt content. An empty
/// or whitespace-only completion is an error, not an answer.
pub struct PromptAnswerSource {
    client: Arc<dyn CompletionClient>,
}

impl PromptAnswerSource {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerSource for PromptAnswerSource {
    async fn answer(&self, question: &Question) -> Result<Answer, SourceError> {
        let prompt = EightBallPrompt::prompt(question.content());
        let raw = self
            .client
            .complete(&prompt)
            .await
            .map_err(|e| SourceError::CompletionFailed(e.to_string()))?;

        debug!(bytes = raw.len(), "Completion received");
        let cleaned = EightBallPrompt::clean_response(&raw);
        Answer::try_new(cleaned).ok_or(SourceError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eightball_application::CompletionError;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Completion client returning a fixed payload, recording prompts.
    struct MockCompletion {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockCompletion {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for MockCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(CompletionError::Request(message.clone())),
            }
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_strips_answer_prefix() {
        let client = Arc::new(MockCompletion::replying("Answer: Absolutely!"));
        let source = PromptAnswerSource::new(client);

        let answer = source.answer(&Question::new("Will it work?")).await.unwrap();

        assert_eq!(answer.as_str(), "Absolutely!");
    }

    #[tokio::test]
    async fn test_trims_whitespace() {
        let client = Arc::new(MockCompletion::replying("  \n Unlikely \n"));
        let source = PromptAnswerSource::new(client);

        let answer = source.answer(&Question::new("Q")).await.unwrap();

        assert_eq!(answer.as_str(), "Unlikely");
    }

    #[tokio::test]
    async fn test_prompt_contains_question() {
        let client = Arc::new(MockCompletion::replying("Simply put, no"));
        let source = PromptAnswerSource::new(client.clone());

        source.answer(&Question::new("Will it rain?")).await.unwrap();

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User: Will it rain?"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_error() {
        let client = Arc::new(MockCompletion::replying("Answer:   "));
        let source = PromptAnswerSource::new(client);

        let result = source.answer(&Question::new("Q")).await;

        assert!(matches!(result, Err(SourceError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let client = Arc::new(MockCompletion::failing("model offline"));
        let source = PromptAnswerSource::new(client);

        let result = source.answer(&Question::new("Q")).await;

        match result {
            Err(SourceError::CompletionFailed(message)) => {
                assert!(message.contains("model offline"));
            }
            other => panic!("Expected CompletionFailed, got {other:?}"),
        }
    }
}
