//! Translation table storage and loading

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Language;

/// Errors raised while loading or validating a translation table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table file {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Covers malformed TOML and duplicate keys, which TOML rejects.
    #[error("failed to parse translation table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("translation table contains an empty key")]
    EmptyKey,

    #[error("empty translation for phrase '{0}'")]
    EmptyTranslation(String),
}

/// Temporary structure for deserializing the TOML table
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawTable(BTreeMap<String, String>);

/// Immutable mapping from canonical English phrases to their Chinese
/// translations. Populated once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    /// Parse a table from a flat TOML document of string pairs.
    ///
    /// Duplicate keys are a parse error (TOML forbids them), so a
    /// conflicting entry fails the load instead of silently winning.
    /// Empty keys and empty translations are rejected here as well.
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let RawTable(entries) = toml::from_str(content)?;

        for (english, chinese) in &entries {
            if english.is_empty() {
                return Err(TableError::EmptyKey);
            }
            if chinese.is_empty() {
                return Err(TableError::EmptyTranslation(english.clone()));
            }
        }

        Ok(TranslationTable { entries })
    }

    /// Load and validate a table from a TOML file
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Look up the translation for a phrase, exact match only
    pub fn get(&self, english: &str) -> Option<&str> {
        self.entries.get(english).map(String::as_str)
    }

    /// Resolve a display string for the given language preference.
    ///
    /// Phrases missing from the table come back unchanged regardless of
    /// the preference (identity fallback); phrases present in the table
    /// come back unchanged only when the preference is
    /// [`Language::English`]. Total: never fails, never allocates.
    pub fn translate<'a>(&'a self, english: &'a str, lang: Language) -> &'a str {
        match self.entries.get(english) {
            Some(chinese) => match lang {
                Language::English => english,
                Language::Chinese => chinese.as_str(),
            },
            None => english,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
