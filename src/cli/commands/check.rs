//! Check command

use anyhow::Result;
use colored::Colorize;

use crate::checker::{check_table, Severity};
use crate::i18n::TranslationTable;

pub fn execute(table: &TranslationTable) -> Result<()> {
    let result = check_table(table);

    if result.is_ok() {
        println!("{}", "No issues found!".green());
        return Ok(());
    }

    println!("{}", "Issues Found:".bold());
    for issue in &result.issues {
        let tag = match issue.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!("  {}: '{}': {}", tag, issue.phrase, issue.message);
    }

    let errors = result
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = result.issues.len() - errors;

    if result.has_errors() {
        anyhow::bail!("Found {} error(s), {} warning(s)", errors, warnings);
    }

    println!("Found {} warning(s)", warnings);
    Ok(())
}
