//! Loading domain hint tables from TOML.
//!
//! ```toml
//! [[hint]]
//! key = "gender"
//! hints = ["sex"]
//!
//! [[hint]]
//! key = "region"
//! hints = ["location", "state", "city"]
//! ```
//!
//! Entry order in the file is the table order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::heuristics::{DomainHintTable, HintEntry};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read hint file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hint file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("hint entry {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("hint entry for key {key:?} has no hints")]
    NoHints { key: String },

    #[error("hint entry for key {key:?} contains an empty hint")]
    EmptyHint { key: String },

    #[error("duplicate hint key {key:?}")]
    DuplicateKey { key: String },
}

#[derive(Debug, Deserialize)]
struct HintFile {
    #[serde(default)]
    hint: Vec<HintEntry>,
}

/// Reads and validates a hint table from a TOML file.
pub fn load_hint_table(path: &Path) -> Result<DomainHintTable, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_hint_file(&text).map_err(|error| match error {
        ParseError::Toml(source) => ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Invalid(error) => error,
    })?;
    debug!(path = %path.display(), entries = table.len(), "loaded hint table");
    Ok(table)
}

/// Parses a hint table from TOML text.
pub fn parse_hint_table(text: &str) -> Result<DomainHintTable, ConfigError> {
    parse_hint_file(text).map_err(|error| match error {
        ParseError::Toml(source) => ConfigError::Toml {
            path: PathBuf::from("<inline>"),
            source,
        },
        ParseError::Invalid(error) => error,
    })
}

enum ParseError {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn parse_hint_file(text: &str) -> Result<DomainHintTable, ParseError> {
    let file: HintFile = toml::from_str(text).map_err(ParseError::Toml)?;
    validate(&file.hint).map_err(ParseError::Invalid)?;
    Ok(DomainHintTable::new(file.hint))
}

fn validate(entries: &[HintEntry]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let key = entry.key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey { index });
        }
        if entry.hints.is_empty() {
            return Err(ConfigError::NoHints {
                key: entry.key.clone(),
            });
        }
        if entry.hints.iter().any(|hint| hint.trim().is_empty()) {
            return Err(ConfigError::EmptyHint {
                key: entry.key.clone(),
            });
        }
        if !seen.insert(key.to_lowercase()) {
            return Err(ConfigError::DuplicateKey {
                key: entry.key.clone(),
            });
        }
    }
    Ok(())
}
