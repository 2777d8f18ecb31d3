//! Configuration loading
//!
//! TOML file discovery and merging, plus the on-disk config schema.

pub mod file_config;
pub mod loader;

pub use file_config::{FileCacheConfig, FileConfig, FileResolverConfig};
pub use loader::ConfigLoader;
