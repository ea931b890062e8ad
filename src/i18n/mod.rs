//! Internationalization (i18n) module for phrasebook
//!
//! Owns the English-to-Chinese translation table and the lookup that
//! resolves a display phrase for the current language preference.

use std::sync::OnceLock;

mod table;

pub use table::{TableError, TranslationTable};

/// Environment variable consulted on every lookup
pub const LANGUAGE_ENV: &str = "LANGUAGE";

/// Language preference for a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Return the English phrase even when a translation exists
    English,
    /// Return the Chinese translation when one exists
    Chinese,
}

impl Language {
    /// Read the preference from the `LANGUAGE` environment variable.
    ///
    /// Read fresh on every call, never cached: the exact value `"en"`
    /// selects English passthrough; any other value, or the variable
    /// being unset, selects Chinese.
    pub fn from_env() -> Self {
        match std::env::var(LANGUAGE_ENV) {
            Ok(value) if value == "en" => Language::English,
            _ => Language::Chinese,
        }
    }
}

/// Embedded Simplified Chinese table (fallback)
const EMBEDDED_ZH_CN: &str = include_str!("../../assets/i18n/zh_cn.toml");

/// Global table instance
static TABLE: OnceLock<TranslationTable> = OnceLock::new();

/// Load the table from the external file if present, else the embedded copy
fn load_table() -> TranslationTable {
    let table_file = crate::config::table_path();
    if table_file.exists() {
        match TranslationTable::load(&table_file) {
            Ok(table) => return table,
            Err(e) => {
                eprintln!(
                    "Warning: ignoring table file {}: {}",
                    table_file.display(),
                    e
                );
            }
        }
    }

    TranslationTable::from_toml_str(EMBEDDED_ZH_CN)
        .expect("Failed to parse embedded translation table")
}

/// Initialize the global table with an explicit instance.
///
/// Has no effect if the table was already initialized; returns whichever
/// instance won.
pub fn init_table(table: TranslationTable) -> &'static TranslationTable {
    TABLE.get_or_init(|| table)
}

/// Get the global table, loading it on first use
pub fn table() -> &'static TranslationTable {
    TABLE.get_or_init(load_table)
}

/// Resolve a UI phrase against the global table, honoring `LANGUAGE`.
///
/// Unknown phrases come back unchanged.
pub fn translate(english: &str) -> &str {
    table().translate(english, Language::from_env())
}
