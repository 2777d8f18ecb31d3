//! Resolver policy knobs

use serde::{Deserialize, Serialize};

/// Tunable behavior of [`ResolveAnswerUseCase`](crate::ResolveAnswerUseCase)
///
/// Sentinel handling is a policy choice, not a correctness question:
/// deployments that want a stable answer per question return whatever is
/// cached, while deployments that treat `"Ask again later."` as a
/// non-answer regenerate it on the next ask. The default is to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverPolicy {
    /// Treat a cached sentinel answer as a miss and regenerate it.
    pub refresh_on_sentinel: bool,
}

impl Default for ResolverPolicy {
    fn default() -> Self {
        Self {
            refresh_on_sentinel: true,
        }
    }
}

impl ResolverPolicy {
    pub fn with_refresh_on_sentinel(mut self, refresh: bool) -> Self {
        self.refresh_on_sentinel = refresh;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refreshes_sentinel() {
        assert!(ResolverPolicy::default().refresh_on_sentinel);
    }

    #[test]
    fn test_builder() {
        let policy = ResolverPolicy::default().with_refresh_on_sentinel(false);
        assert!(!policy.refresh_on_sentinel);
    }
}
