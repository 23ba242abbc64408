//! Password policy validation library
//!
//! This library checks candidate passwords against a fixed policy:
//! printable ASCII only, between 8 and 64 characters, and not present
//! in a list of common passwords.
//!
//! # Features
//!
//! - `async` (default): Enables async stream validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-policy` command line tool
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the common password file used by
//!   [`Dictionary::from_env`] (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{validate, Dictionary, FailureKind};
//!
//! // Load the dictionary (once at startup)
//! let dictionary = Dictionary::from_path("common-passwords.txt").expect("Failed to load dictionary");
//! dictionary.sort();
//!
//! let outcome = validate("password".as_bytes(), &dictionary);
//! if let Some(FailureKind::TooCommon) = outcome.failure() {
//!     println!("{} is too common", outcome.password());
//! }
//! ```

// Internal modules
mod dictionary;
mod outcome;
mod sections;
mod stream;
mod validator;

// Public API
pub use dictionary::{dictionary_path, Dictionary, DictionaryError, DICTIONARY_PATH_ENV};
pub use outcome::{FailureKind, SanitizedPassword, ValidationOutcome};
pub use sections::{sanitize, Sanitized, MAX_LENGTH, MIN_LENGTH, PLACEHOLDER};
pub use stream::{read_candidate, validate_lines, ValidationSummary, MAX_LINE_BYTES};
pub use validator::{validate, validate_secret, validate_str};

#[cfg(feature = "async")]
pub use stream::validate_lines_tx;
