//! Cache adapters
//!
//! Two backings for the application's `Cache` port: a process-local map
//! and an embedded JSON file store.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileCache;
pub use memory::MemoryCache;
