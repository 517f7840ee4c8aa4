//! Rule-based password validation library
//!
//! This library validates passwords against a composable set of checks
//! (length, character classes, case mixing, repetitions, sequences and digit
//! placement) and combines their results with a configurable pass policy.
//!
//! # Features
//!
//! - `async` (default): Enables async validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! [`CheckConfig::from_env`] reads `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`,
//! `PWD_DIGIT_REPETITION`, `PWD_LETTER_REPETITION`, `PWD_SYMBOL_REPETITION`,
//! `PWD_DIGIT_SEQUENCE` and `PWD_LETTER_SEQUENCE`.
//!
//! # Example
//!
//! ```rust
//! use pwd_validator::{CheckKinds, PassPolicy, Validator};
//! use secrecy::SecretString;
//!
//! let mut validator = Validator::with_checks(CheckKinds::BASIC).expect("valid kinds");
//! validator.add_custom_check("no-spaces", |pwd| !pwd.contains(' '));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! assert!(validator.validate(&password));
//!
//! let weak = SecretString::new("password".to_string().into());
//! let report = validator.report(&weak);
//! for check in report.failed() {
//!     println!("Failed: {check}");
//! }
//! assert!(report.satisfies(PassPolicy::MinPassed(3)));
//! ```

mod config;
mod custom;
mod error;
mod factory;
mod kind;
mod report;
mod rules;
mod scan;
mod validator;

// Public API
pub use config::{
    CheckConfig, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_REPETITION_LENGTH,
    DEFAULT_SEQUENCE_LENGTH, SymbolSet, Threshold,
};
pub use custom::{CheckId, CustomCheck, SimpleCheck};
pub use error::{Result, ValidatorError};
pub use factory::{build as build_rule, create as create_rule};
pub use kind::{ActiveChecks, CheckKind, CheckKinds};
pub use report::{PassPolicy, ValidationReport};
pub use rules::Rule;
pub use scan::{Direction, contains_sequence, repetition_check};
pub use validator::Validator;
