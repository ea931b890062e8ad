//! List command

use anyhow::Result;
use colored::Colorize;

use crate::i18n::TranslationTable;

pub fn execute(table: &TranslationTable) -> Result<()> {
    if table.is_empty() {
        println!("No entries found.");
        return Ok(());
    }

    let width = table
        .iter()
        .map(|(english, _)| english.len())
        .max()
        .unwrap_or(0)
        .max("ENGLISH".len());

    println!(
        "{}  {}",
        format!("{:width$}", "ENGLISH").bold(),
        "CHINESE".bold()
    );
    for (english, chinese) in table.iter() {
        println!("{english:width$}  {chinese}");
    }
    println!("Total: {} entries", table.len());

    Ok(())
}
