//! Cache port
//!
//! Defines the interface for the key/value store used to memoize answers.
//! Real backings range from an in-process map to an embedded persistent
//! store or a network-addressed remote cache; all satisfy this same
//! byte-oriented contract.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations
///
/// A read or write failure is an outage of the backing store, not a miss.
/// A miss is `Ok(None)` from [`Cache::get`].
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Key/value store for memoized answers
///
/// This port defines how the application layer reads and writes cached
/// answers. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Look up the value stored under `key`. Returns `Ok(None)` when the
    /// key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, overwriting any existing entry.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;
}
