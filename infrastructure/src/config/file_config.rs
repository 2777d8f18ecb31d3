//! On-disk configuration schema
//!
//! The `eightball.toml` shape:
//!
//! ```toml
//! answers = ["It is certain", "Very doubtful"]
//!
//! [cache]
//! path = "/var/lib/eightball/answers.json"
//!
//! [resolver]
//! refresh_on_sentinel = true
//! ```

use eightball_application::ResolverPolicy;
use eightball_domain::Answer;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Canned answer candidates. Empty means the built-in four.
    pub answers: Vec<String>,
    pub cache: FileCacheConfig,
    pub resolver: FileResolverConfig,
}

/// `[cache]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Where the JSON answer store lives. `None` means the platform
    /// data directory.
    pub path: Option<PathBuf>,
}

/// `[resolver]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    pub refresh_on_sentinel: bool,
}

impl Default for FileResolverConfig {
    fn default() -> Self {
        Self {
            refresh_on_sentinel: true,
        }
    }
}

impl FileConfig {
    /// The configured canned answers, falling back to the built-in list.
    ///
    /// Blank entries are dropped rather than rejected, so a sloppy config
    /// file degrades to fewer answers instead of a startup failure.
    pub fn canned_answers(&self) -> Vec<Answer> {
        let configured: Vec<Answer> = self
            .answers
            .iter()
            .filter_map(|text| Answer::try_new(text.clone()))
            .collect();
        if configured.is_empty() {
            crate::sources::default_answers()
        } else {
            configured
        }
    }

    /// The resolver policy expressed by this config.
    pub fn resolver_policy(&self) -> ResolverPolicy {
        ResolverPolicy::default().with_refresh_on_sentinel(self.resolver.refresh_on_sentinel)
    }
}
