//! Translate command

use anyhow::Result;

use crate::i18n::{Language, TranslationTable};

pub fn execute(table: &TranslationTable, phrases: &[String]) -> Result<()> {
    // Read once per invocation; each process start sees the current value
    let lang = Language::from_env();

    for phrase in phrases {
        println!("{}", table.translate(phrase, lang));
    }

    Ok(())
}
