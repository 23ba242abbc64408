//! Length section - checks password length bounds.

use crate::dictionary::Dictionary;
use crate::outcome::{FailureKind, SanitizedPassword};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

/// Checks that the password has at least [`MIN_LENGTH`] scalars.
///
/// # Returns
/// - `Some(TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn min_length_section(password: &SanitizedPassword, _: &Dictionary) -> SectionResult {
    if password.char_count() < MIN_LENGTH {
        return Some(FailureKind::TooShort);
    }
    None
}

/// Checks that the password has at most [`MAX_LENGTH`] scalars.
///
/// # Returns
/// - `Some(TooLong)` if password is too long
/// - `None` otherwise
pub fn max_length_section(password: &SanitizedPassword, _: &Dictionary) -> SectionResult {
    if password.char_count() > MAX_LENGTH {
        return Some(FailureKind::TooLong);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwd(value: &str) -> SanitizedPassword {
        SanitizedPassword::new(value.to_string())
    }

    #[test]
    fn test_min_length_too_short() {
        let result = min_length_section(&pwd("Short1!"), &Dictionary::default());
        assert_eq!(result, Some(FailureKind::TooShort));
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        let result = min_length_section(&pwd("12345678"), &Dictionary::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_max_length_exactly_maximum() {
        let result = max_length_section(&pwd(&"l".repeat(64)), &Dictionary::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_max_length_too_long() {
        let result = max_length_section(&pwd(&"l".repeat(65)), &Dictionary::default());
        assert_eq!(result, Some(FailureKind::TooLong));
    }
}
