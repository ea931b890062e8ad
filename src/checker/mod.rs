//! Translation table validation
//!
//! Reports authoring mistakes that the exact-match lookup policy would
//! otherwise hide silently. Duplicate keys and empty entries never reach
//! the checker: table loading already rejects them.

use crate::i18n::TranslationTable;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single issue found in a table
#[derive(Debug, Clone)]
pub struct CheckIssue {
    pub severity: Severity,
    pub phrase: String,
    pub message: String,
}

/// Result of checking a table
#[derive(Debug, Default)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        CheckResult { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}

/// Check a table for entries the lookup can never serve correctly
pub fn check_table(table: &TranslationTable) -> CheckResult {
    let mut result = CheckResult::new();

    for (english, chinese) in table.iter() {
        if english.trim() != english {
            // Call sites pass trimmed literals, so this key is unreachable
            result.add_issue(CheckIssue {
                severity: Severity::Error,
                phrase: english.to_string(),
                message: "key has leading or trailing whitespace and can never match".to_string(),
            });
        }

        if chinese == english {
            result.add_issue(CheckIssue {
                severity: Severity::Warning,
                phrase: english.to_string(),
                message: "translation is identical to the English phrase".to_string(),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_table() {
        let table = TranslationTable::from_toml_str(
            r#"
"Alerting" = "报警"
"Explore" = "探索"
"#,
        )
        .unwrap();

        let result = check_table(&table);
        assert!(result.is_ok());
    }

    #[test]
    fn test_whitespace_key_is_an_error() {
        let table = TranslationTable::from_toml_str(r#"" Alerting" = "报警""#).unwrap();

        let result = check_table(&table);
        assert!(result.has_errors());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert!(result.issues[0].message.contains("whitespace"));
    }

    #[test]
    fn test_identity_translation_is_a_warning() {
        let table = TranslationTable::from_toml_str(r#""Admin" = "Admin""#).unwrap();

        let result = check_table(&table);
        assert!(!result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }
}
