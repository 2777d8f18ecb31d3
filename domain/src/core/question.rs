//! Question value object

use serde::{Deserialize, Serialize};

/// A question posed to the Magic 8 Ball (Value Object)
///
/// Represents the input text that will be resolved to an answer,
/// either from the cache or from an answer source. The question text
/// doubles as the cache key, so it is kept verbatim after validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Will it rain tomorrow?");
        assert_eq!(q.content(), "Will it rain tomorrow?");
    }

    #[test]
    fn test_question_from_str() {
        let q: Question = "Will it rain tomorrow?".into();
        assert_eq!(q.content(), "Will it rain tomorrow?");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Question::try_new("Will it work?").is_some());
    }

    #[test]
    fn test_content_kept_verbatim() {
        // Leading/trailing whitespace is preserved, the text is the cache key.
        let q = Question::new("  Will it work?  ");
        assert_eq!(q.content(), "  Will it work?  ");
    }
}
