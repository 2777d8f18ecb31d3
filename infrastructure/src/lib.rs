//! Infrastructure layer for eightball
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod sources;

// Re-export commonly used types
pub use cache::{JsonFileCache, MemoryCache};
pub use config::{ConfigLoader, FileCacheConfig, FileConfig, FileResolverConfig};
pub use sources::{CannedAnswerSource, PromptAnswerSource, default_answers};
