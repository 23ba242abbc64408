//! Common section - checks if password is in the common password dictionary.

use crate::dictionary::Dictionary;
use crate::outcome::{FailureKind, SanitizedPassword};
use super::SectionResult;

/// Checks if the password is an exact entry of the dictionary.
///
/// # Returns
/// - `Some(TooCommon)` if password is in the dictionary
/// - `None` otherwise
pub fn common_section(password: &SanitizedPassword, dictionary: &Dictionary) -> SectionResult {
    if dictionary.contains(password.as_str()) {
        return Some(FailureKind::TooCommon);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(["password", "123456", "qwerty"])
    }

    #[test]
    fn test_common_section_common_password() {
        let pwd = SanitizedPassword::new("password".to_string());
        assert_eq!(common_section(&pwd, &dictionary()), Some(FailureKind::TooCommon));
    }

    #[test]
    fn test_common_section_uncommon_password() {
        let pwd = SanitizedPassword::new("CorrectHorseBatteryStaple!123".to_string());
        assert_eq!(common_section(&pwd, &dictionary()), None);
    }
}
