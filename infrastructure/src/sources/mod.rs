//! Answer source adapters
//!
//! Two implementations of the application's `AnswerSource` port: the
//! classic canned list with random selection, and a completion-model
//! backed source using the 8 ball prompt.

pub mod canned;
pub mod prompt;

pub use canned::{CannedAnswerSource, default_answers};
pub use prompt::PromptAnswerSource;
