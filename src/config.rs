//! Configuration for the vocabulary service.
//!
//! # Examples
//!
//! ```
//! use spelltrie::config::ServiceConfig;
//!
//! let config = ServiceConfig::default();
//! assert_eq!(config.default_vocabulary, "frequency.txt");
//! assert_eq!(config.prefix_limit, 10);
//!
//! let mut custom = ServiceConfig::default();
//! custom.prefix_limit = 25;
//! custom.session_idle_timeout_secs = Some(1800);
//! assert!(custom.validate().is_ok());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellTrieError};
use crate::trie::DEFAULT_PREFIX_LIMIT;

/// Settings for [`crate::service::VocabularyService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory vocabulary names are resolved against.
    pub vocabulary_dir: PathBuf,
    /// Vocabulary a new session starts on.
    pub default_vocabulary: String,
    /// Maximum number of prefix search results.
    pub prefix_limit: usize,
    /// Sessions idle for longer than this are dropped on expiry sweeps.
    pub session_idle_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            vocabulary_dir: PathBuf::from("."),
            default_vocabulary: "frequency.txt".to_string(),
            prefix_limit: DEFAULT_PREFIX_LIMIT,
            session_idle_timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix_limit == 0 {
            return Err(SpellTrieError::config("prefix_limit must be positive"));
        }
        if self.default_vocabulary.trim().is_empty() {
            return Err(SpellTrieError::config("default_vocabulary must not be empty"));
        }
        Ok(())
    }

    pub fn session_idle_timeout(&self) -> Option<Duration> {
        self.session_idle_timeout_secs.map(Duration::from_secs)
    }
}
