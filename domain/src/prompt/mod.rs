//! Prompt construction for the completion-backed answer source

pub mod template;

pub use template::EightBallPrompt;
