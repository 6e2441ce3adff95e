use crate::models::{RuleViolation, ValidationResult};

fn scrub(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

/// Live keystroke filter for the URL field: trims whitespace, drops every
/// character outside `[a-z0-9_-]`, lowercases. Idempotent.
pub fn normalize_typed(raw: &str) -> String {
    scrub(raw)
}

/// Canonical cleanup applied before submit checks. Same scrub as
/// `normalize_typed`, then strips `-` and `_` from both ends. Interior
/// characters are left alone, double underscores included.
pub fn clean_up_urlable(raw: &str) -> String {
    scrub(raw)
        .trim_matches(|c: char| c == '-' || c == '_')
        .to_string()
}

/// Submit-time validation.
///
/// A candidate the cleanup leaves untouched, with two or more characters and
/// no `__`, is accepted as-is. Anything else is diagnosed against the
/// original input; every matching rule is collected, not just the first, so
/// the user sees all of them in one pass. When no specific rule explains the
/// mismatch the catch-all `InvalidUrl` is reported.
pub fn validate_for_submit(raw: &str) -> ValidationResult {
    let cleaned = clean_up_urlable(raw);
    let len = raw.chars().count();

    if cleaned == raw && len >= 2 && !raw.contains("__") {
        return ValidationResult::Valid(raw.to_string());
    }

    let mut violations = Vec::new();
    if len < 2 {
        violations.push(RuleViolation::TooShort);
    }
    if matches!(raw.chars().next(), Some('-' | '_')) {
        violations.push(RuleViolation::MustStartWithLetterOrNumber);
    }
    if len > 1 && matches!(raw.chars().last(), Some('-' | '_')) {
        violations.push(RuleViolation::MustEndWithLetterOrNumber);
    }
    if raw.contains("__") {
        violations.push(RuleViolation::NoDoubleUnderscore);
    }
    if violations.is_empty() {
        violations.push(RuleViolation::InvalidUrl);
    }

    ValidationResult::Invalid(violations)
}
