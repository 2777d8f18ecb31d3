//! Application layer for eightball
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolverPolicy;
pub use ports::{
    answer_source::{AnswerSource, SourceError},
    cache::{Cache, CacheError},
    completion::{CompletionClient, CompletionError},
};
pub use use_cases::resolve_answer::{ResolveAnswerUseCase, ResolveError};
