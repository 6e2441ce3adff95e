use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One reason a candidate slug was rejected on submit.
///
/// Variant order mirrors the order the checks run in; an `Invalid` result
/// lists its violations in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "kebab-case")]
pub enum RuleViolation {
    #[error("URL must be two or more characters.")]
    TooShort,
    #[error("URL must start with a letter or number.")]
    MustStartWithLetterOrNumber,
    #[error("URL must end with a letter or number.")]
    MustEndWithLetterOrNumber,
    #[error("URL can not contain two underscores in a row.")]
    NoDoubleUnderscore,
    #[error("Invalid URL")]
    InvalidUrl,
}

impl RuleViolation {
    /// Stable identifier, matching the serde representation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort => "too-short",
            Self::MustStartWithLetterOrNumber => "must-start-with-letter-or-number",
            Self::MustEndWithLetterOrNumber => "must-end-with-letter-or-number",
            Self::NoDoubleUnderscore => "no-double-underscore",
            Self::InvalidUrl => "invalid-url",
        }
    }
}

impl FromStr for RuleViolation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "too-short" => Ok(Self::TooShort),
            "must-start-with-letter-or-number" => Ok(Self::MustStartWithLetterOrNumber),
            "must-end-with-letter-or-number" => Ok(Self::MustEndWithLetterOrNumber),
            "no-double-underscore" => Ok(Self::NoDoubleUnderscore),
            "invalid-url" => Ok(Self::InvalidUrl),
            _ => Err(()),
        }
    }
}

/// Outcome of submit-time validation.
///
/// `Invalid` always carries at least one violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationResult {
    Valid(String),
    Invalid(Vec<RuleViolation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(violations) => violations,
        }
    }
}
