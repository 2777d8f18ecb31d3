//! Use cases orchestrating domain objects through the ports

pub mod resolve_answer;

pub use resolve_answer::{ResolveAnswerUseCase, ResolveError};
