//! Answer value object and the sentinel policy

use serde::{Deserialize, Serialize};

/// A resolved Magic 8 Ball answer (Value Object)
///
/// Answers are non-empty text. One specific value, [`Answer::SENTINEL`],
/// is treated as a "weak" answer: callers running with the
/// refresh-on-sentinel policy never trust it from cache and regenerate
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer {
    text: String,
}

impl Answer {
    /// The non-committal answer that is never trusted from cache when
    /// the refresh-on-sentinel policy is enabled.
    pub const SENTINEL: &'static str = "Ask again later.";

    /// Create a new answer
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Answer cannot be empty");
        Self { text }
    }

    /// Try to create a new answer, returning None if the text is empty
    /// or only whitespace.
    ///
    /// This is the validation applied when decoding a raw cache payload:
    /// an empty stored value does not decode to an answer and is treated
    /// as a cache miss.
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// The sentinel answer.
    pub fn sentinel() -> Self {
        Self {
            text: Self::SENTINEL.to_string(),
        }
    }

    /// Whether this answer is exactly the sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.text == Self::SENTINEL
    }

    /// Get the answer text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The JSON document returned at the service boundary: `{"answer": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.into_text(),
        }
    }
}
