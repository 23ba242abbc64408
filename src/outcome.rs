//! Validation result types.
//!
//! Policy rejections are ordinary values: every call returns the sanitized
//! password, plus the reason it was rejected if it was.

use std::fmt;

/// A candidate password decoded and restricted to printable ASCII.
///
/// Every scalar outside `' '..='~'` has been replaced by `*`, so the value is
/// always safe to display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedPassword(String);

impl SanitizedPassword {
    pub(crate) fn new(value: String) -> Self {
        debug_assert!(value.bytes().all(|b| (32..=126).contains(&b)));
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of decoded scalar values, placeholders included.
    pub fn char_count(&self) -> usize {
        // printable ASCII only: one byte per scalar
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SanitizedPassword {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SanitizedPassword {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The reason a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Contains a character outside printable ASCII
    InvalidCharacters,
    /// Longer than [`MAX_LENGTH`](crate::MAX_LENGTH)
    TooLong,
    /// Shorter than [`MIN_LENGTH`](crate::MIN_LENGTH)
    TooShort,
    /// Present in the common password dictionary
    TooCommon,
}

impl FailureKind {
    pub fn description(&self) -> &'static str {
        match self {
            FailureKind::InvalidCharacters => "Invalid Characters",
            FailureKind::TooLong => "Too Long",
            FailureKind::TooShort => "Too Short",
            FailureKind::TooCommon => "Too Common",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of validating a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(SanitizedPassword),
    Invalid(SanitizedPassword, FailureKind),
}

impl ValidationOutcome {
    pub fn password(&self) -> &SanitizedPassword {
        match self {
            ValidationOutcome::Valid(password) | ValidationOutcome::Invalid(password, _) => {
                password
            }
        }
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(_, kind) => Some(*kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn into_password(self) -> SanitizedPassword {
        match self {
            ValidationOutcome::Valid(password) | ValidationOutcome::Invalid(password, _) => {
                password
            }
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid(password) => write!(f, "{}", password),
            ValidationOutcome::Invalid(password, kind) => {
                write!(f, "{} -> Error: {}", password, kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::InvalidCharacters.to_string(), "Invalid Characters");
        assert_eq!(FailureKind::TooLong.to_string(), "Too Long");
        assert_eq!(FailureKind::TooShort.to_string(), "Too Short");
        assert_eq!(FailureKind::TooCommon.to_string(), "Too Common");
    }

    #[test]
    fn test_outcome_accessors() {
        let valid = ValidationOutcome::Valid(SanitizedPassword::new("zxlkas12s".to_string()));
        assert!(valid.is_valid());
        assert_eq!(valid.failure(), None);
        assert_eq!(valid.password(), &"zxlkas12s");

        let invalid = ValidationOutcome::Invalid(
            SanitizedPassword::new("*short".to_string()),
            FailureKind::InvalidCharacters,
        );
        assert!(!invalid.is_valid());
        assert_eq!(invalid.failure(), Some(FailureKind::InvalidCharacters));
        assert_eq!(invalid.into_password().into_string(), "*short");
    }

    #[test]
    fn test_outcome_display() {
        let invalid = ValidationOutcome::Invalid(
            SanitizedPassword::new("password".to_string()),
            FailureKind::TooCommon,
        );
        assert_eq!(invalid.to_string(), "password -> Error: Too Common");

        let valid = ValidationOutcome::Valid(SanitizedPassword::new("zxlkas12s".to_string()));
        assert_eq!(valid.to_string(), "zxlkas12s");
    }
}
