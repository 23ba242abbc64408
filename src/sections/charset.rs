//! Charset section - restricts the password to printable ASCII.

use crate::outcome::{FailureKind, SanitizedPassword};

/// Character substituted for anything outside printable ASCII.
pub const PLACEHOLDER: char = '*';

/// Result of decoding and sanitizing a raw candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub password: SanitizedPassword,
    /// Number of scalars that were replaced by [`PLACEHOLDER`]
    pub replaced: usize,
}

fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Decodes `raw` as UTF-8 and replaces every scalar outside `' '..='~'`.
///
/// Each byte of a malformed sequence decodes to one replacement scalar, so it
/// is replaced (and counted) on its own.
pub fn sanitize(raw: &[u8]) -> Sanitized {
    let mut value = String::with_capacity(raw.len());
    let mut replaced = 0;

    for chunk in raw.utf8_chunks() {
        for c in chunk.valid().chars() {
            if is_printable_ascii(c) {
                value.push(c);
            } else {
                value.push(PLACEHOLDER);
                replaced += 1;
            }
        }
        for _ in chunk.invalid() {
            value.push(PLACEHOLDER);
            replaced += 1;
        }
    }

    Sanitized {
        password: SanitizedPassword::new(value),
        replaced,
    }
}

/// Sanitizes the candidate and checks it held only printable ASCII.
///
/// # Returns
/// The sanitized password, and `Some(InvalidCharacters)` if anything was replaced
pub fn charset_section(raw: &[u8]) -> (SanitizedPassword, Option<FailureKind>) {
    let Sanitized { password, replaced } = sanitize(raw);
    if replaced > 0 {
        return (password, Some(FailureKind::InvalidCharacters));
    }
    (password, None)
}
