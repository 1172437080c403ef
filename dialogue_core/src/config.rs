//! Configuration - the grammar tables and the fixed answers.
//!
//! Everything has a default, so an empty (or absent) file describes the
//! standard dialogue language:
//!
//! ```toml
//! [lexicon]
//! negating_words = ["don't", "doesn't", "nobody"]
//!
//! [messages]
//! contradiction = "I am abroad."
//! true_false_unknown = "maybe."
//! ```

use grammar_rules::Lexicon;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The fixed answers. They are printed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalogue {
    /// Given to every question once a dialogue is contradicted.
    pub contradiction: String,
    pub true_false_unknown: String,
    pub who_unknown: String,
    pub what_unknown: String,
}

impl Default for MessageCatalogue {
    fn default() -> Self {
        Self {
            contradiction: "I am abroad.".to_string(),
            true_false_unknown: "maybe.".to_string(),
            who_unknown: "I don't know.".to_string(),
            what_unknown: "I don't know.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lexicon: Lexicon,
    pub messages: MessageCatalogue,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
