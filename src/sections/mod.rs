//! Password validation sections
//!
//! Each section checks one rule of the password policy.

mod charset;
mod common;
mod length;

pub use charset::{charset_section, sanitize, Sanitized, PLACEHOLDER};
pub use common::common_section;
pub use length::{max_length_section, min_length_section, MAX_LENGTH, MIN_LENGTH};

use crate::dictionary::Dictionary;
use crate::outcome::{FailureKind, SanitizedPassword};

/// Result type for section check functions.
/// - `Some(kind)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<FailureKind>;

/// A rule applied to an already sanitized password.
pub type Section = fn(&SanitizedPassword, &Dictionary) -> SectionResult;
