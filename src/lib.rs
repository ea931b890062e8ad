//! phrasebook - English-to-Chinese UI phrase lookup
//!
//! Maps canonical English UI phrases to fixed Simplified Chinese
//! translations. Phrases missing from the table come back unchanged, and
//! setting `LANGUAGE=en` forces English passthrough even when a
//! translation exists.
//!
//! # Features
//!
//! - Exact-match lookup with identity fallback for unknown phrases
//! - `LANGUAGE` environment variable read fresh on every lookup
//! - Table embedded at compile time, overridable by a user table file
//! - Duplicate keys and empty translations rejected at load
//! - Table checker for entries the lookup can never serve

pub mod checker;
pub mod cli;
pub mod config;
pub mod i18n;

pub use checker::{check_table, CheckIssue, CheckResult, Severity};
pub use i18n::{translate, Language, TableError, TranslationTable};
