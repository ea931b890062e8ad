//! Configuration directory conventions

use std::path::PathBuf;

/// Get the phrasebook configuration directory path
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(".config")
        })
        .join("phrasebook")
}

/// Path of the optional external translation table.
///
/// When this file exists it replaces the embedded table; it is read once
/// at first lookup, never reloaded.
pub fn table_path() -> PathBuf {
    config_dir().join("zh_cn.toml")
}
