//! Core domain concepts shared across all layers.
//!
//! - [`question::Question`] — a validated question posed to the 8 ball
//! - [`answer::Answer`] — a resolved answer, with the sentinel policy
//! - [`error::DomainError`] — domain-level errors

pub mod answer;
pub mod error;
pub mod question;
