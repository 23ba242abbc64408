//! Password validator - main validation logic.

use secrecy::{ExposeSecret, SecretSlice};

use crate::dictionary::Dictionary;
use crate::outcome::ValidationOutcome;
use crate::sections::{
    charset_section, common_section, max_length_section, min_length_section, Section,
};

/// Validates a raw candidate password against the policy.
///
/// Rules run in a fixed order and the first failure is reported:
/// character legality, minimum length, maximum length, common password.
/// When illegal characters are present no later rule is checked.
///
/// # Arguments
/// * `raw` - The candidate bytes, expected to be UTF-8
/// * `dictionary` - Common passwords to reject
///
/// # Returns
/// A `ValidationOutcome` carrying the sanitized password in every case.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn validate(raw: &[u8], dictionary: &Dictionary) -> ValidationOutcome {
    let (password, failure) = charset_section(raw);
    if let Some(kind) = failure {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password rejected by section charset: {}", kind);
        return ValidationOutcome::Invalid(password, kind);
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 3] = [
        ("min_length", min_length_section),
        ("max_length", max_length_section),
        ("common", common_section),
    ];

    for (section_name, section_fn) in sections {
        if let Some(kind) = section_fn(&password, dictionary) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Password rejected by section {}: {} ({} chars)",
                section_name,
                kind,
                password.char_count()
            );
            return ValidationOutcome::Invalid(password, kind);
        }
    }

    ValidationOutcome::Valid(password)
}

/// Same as [`validate`] for a candidate held in a secret buffer.
pub fn validate_secret(raw: &SecretSlice<u8>, dictionary: &Dictionary) -> ValidationOutcome {
    validate(raw.expose_secret(), dictionary)
}

pub fn validate_str(raw: &str, dictionary: &Dictionary) -> ValidationOutcome {
    validate(raw.as_bytes(), dictionary)
}
