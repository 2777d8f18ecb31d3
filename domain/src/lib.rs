//! Domain layer for eightball
//!
//! This crate contains the core value objects and business rules of the
//! Magic 8 Ball answer service. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Cache-aside resolution
//!
//! A [`Question`] is resolved to an [`Answer`] by first consulting a cache
//! and only computing a fresh answer on a miss. The computed answer is
//! written back so later resolutions of the same question are free.
//!
//! ## The sentinel answer
//!
//! One canned answer, `"Ask again later."`, is deliberately non-committal.
//! When the refresh-on-sentinel policy is enabled, a cached sentinel is
//! never trusted: it is treated like a miss and regenerated.

pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use self::core::{
    answer::{Answer, AnswerResponse},
    error::DomainError,
    question::Question,
};
pub use prompt::EightBallPrompt;
