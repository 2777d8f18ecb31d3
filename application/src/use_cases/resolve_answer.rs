//! Resolve Answer use case.
//!
//! The cache-aside core: turn a [`Question`] into an [`Answer`] while
//! minimizing calls to the injected [`AnswerSource`], using the injected
//! [`Cache`] as a memoization layer and enforcing the sentinel-refresh
//! policy.
//!
//! # Concurrency
//!
//! The use case holds no mutable state of its own; all state lives in the
//! injected cache, so concurrent `execute` calls are safe. There is no
//! single-flight coordination around the check-then-set sequence: two
//! concurrent resolutions of the same question may both invoke the source,
//! and the last write wins. Known behavior.

use crate::config::ResolverPolicy;
use crate::ports::answer_source::{AnswerSource, SourceError};
use crate::ports::cache::{Cache, CacheError};
use eightball_domain::{Answer, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during answer resolution.
///
/// The two kinds are deliberately distinct so the boundary layer can map
/// them to different status codes.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(#[from] CacheError),

    #[error("Answer source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Use case for resolving a question to an answer.
///
/// Per call, the flow is:
/// 1. Read the cache under the question text. A read failure is
///    [`ResolveError::CacheUnavailable`]; the source is not consulted.
/// 2. On a miss, or a stored payload that does not decode to an answer,
///    ask the source, write the result back, and return it.
/// 3. On a hit, return the cached answer, unless it is the sentinel and
///    [`ResolverPolicy::refresh_on_sentinel`] is set, in which case the
///    entry is regenerated and overwritten like a miss.
///
/// Each call makes at most one source call and at most one cache write.
/// Collaborator errors are never swallowed into a default answer.
pub struct ResolveAnswerUseCase {
    cache: Arc<dyn Cache>,
    source: Arc<dyn AnswerSource>,
    policy: ResolverPolicy,
}

impl ResolveAnswerUseCase {
    pub fn new(cache: Arc<dyn Cache>, source: Arc<dyn AnswerSource>) -> Self {
        Self {
            cache,
            source,
            policy: ResolverPolicy::default(),
        }
    }

    /// Create with an explicit policy.
    pub fn with_policy(mut self, policy: ResolverPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve `question` to an answer.
    pub async fn execute(&self, question: &Question) -> Result<Answer, ResolveError> {
        let key = question.content();

        match self.cache.get(key).await? {
            Some(payload) => match decode_answer(&payload) {
                Some(cached) if cached.is_sentinel() && self.policy.refresh_on_sentinel => {
                    debug!(question = %question, "Cached sentinel, regenerating");
                    self.generate_and_store(question).await
                }
                Some(cached) => {
                    debug!(question = %question, "Cache hit");
                    Ok(cached)
                }
                None => {
                    warn!(question = %question, "Cached payload undecodable, regenerating");
                    self.generate_and_store(question).await
                }
            },
            None => {
                debug!(question = %question, "Cache miss");
                self.generate_and_store(question).await
            }
        }
    }

    async fn generate_and_store(&self, question: &Question) -> Result<Answer, ResolveError> {
        let answer = self.source.answer(question).await?;
        self.cache
            .set(question.content(), answer.as_str().as_bytes())
            .await?;
        Ok(answer)
    }
}

/// Decode a raw cache payload into an answer.
///
/// Payloads that are not valid UTF-8, or decode to empty text, are treated
/// as absent. Some remote cache backends hand back an empty value where an
/// embedded store would report a missing key.
fn decode_answer(payload: &[u8]) -> Option<Answer> {
    let text = std::str::from_utf8(payload).ok()?;
    Answer::try_new(text)
}
