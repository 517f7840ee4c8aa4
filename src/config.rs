//! Rule configuration.
//!
//! [`CheckConfig`] carries the values the factory injects into new rules and
//! the validator caches between rule creations.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ValidatorError};

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 128;
pub const DEFAULT_REPETITION_LENGTH: usize = 4;
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;

/// Characters accepted by [`SymbolSet::common`].
const COMMON_SYMBOLS: &[char] = &[
    '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '-', '+', '=', '[', '{', '}', ']',
    '\'', '"', ';', ':', '/', '?', '<', '>', ',', '.', '`', '£', '§', '€',
];

/// Run length at which a repetition or sequence rule fails. Always at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    /// Builds a threshold, rejecting values of 1 or less.
    ///
    /// `setting` names the value in the returned error.
    pub fn new(setting: &'static str, value: usize) -> Result<Self> {
        if value <= 1 {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {} = {}", setting, value);
            return Err(ValidatorError::InvalidConfiguration { setting, value });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REPETITION_LENGTH)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Which characters count as symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SymbolSet {
    /// Anything that is neither an ASCII letter nor an ASCII digit.
    #[default]
    NonAlphanumeric,
    /// Only the listed characters.
    Listed(Arc<[char]>),
}

impl SymbolSet {
    pub fn listed(chars: impl IntoIterator<Item = char>) -> Self {
        SymbolSet::Listed(chars.into_iter().collect())
    }

    /// The usual keyboard punctuation plus `£`, `§` and `€`.
    pub fn common() -> Self {
        SymbolSet::Listed(Arc::from(COMMON_SYMBOLS))
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            SymbolSet::NonAlphanumeric => !c.is_ascii_alphanumeric(),
            SymbolSet::Listed(chars) => chars.contains(&c),
        }
    }
}

/// Configuration injected into built-in rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub digit_repetition: Threshold,
    pub letter_repetition: Threshold,
    pub symbol_repetition: Threshold,
    pub digit_sequence: Threshold,
    pub letter_sequence: Threshold,
    pub symbols: SymbolSet,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            digit_repetition: Threshold(DEFAULT_REPETITION_LENGTH),
            letter_repetition: Threshold(DEFAULT_REPETITION_LENGTH),
            symbol_repetition: Threshold(DEFAULT_REPETITION_LENGTH),
            digit_sequence: Threshold(DEFAULT_SEQUENCE_LENGTH),
            letter_sequence: Threshold(DEFAULT_SEQUENCE_LENGTH),
            symbols: SymbolSet::default(),
        }
    }
}

impl CheckConfig {
    /// Builds a configuration from defaults overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`, `PWD_MAX_LENGTH`
    /// - `PWD_DIGIT_REPETITION`, `PWD_LETTER_REPETITION`, `PWD_SYMBOL_REPETITION`
    /// - `PWD_DIGIT_SEQUENCE`, `PWD_LETTER_SEQUENCE`
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// - [`ValidatorError::Environment`] if a value is not an unsigned integer
    /// - [`ValidatorError::InvalidConfiguration`] if a threshold is 1 or less
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            min_length: env_usize("PWD_MIN_LENGTH")?.unwrap_or(defaults.min_length),
            max_length: env_usize("PWD_MAX_LENGTH")?.unwrap_or(defaults.max_length),
            digit_repetition: env_threshold("PWD_DIGIT_REPETITION", defaults.digit_repetition)?,
            letter_repetition: env_threshold("PWD_LETTER_REPETITION", defaults.letter_repetition)?,
            symbol_repetition: env_threshold("PWD_SYMBOL_REPETITION", defaults.symbol_repetition)?,
            digit_sequence: env_threshold("PWD_DIGIT_SEQUENCE", defaults.digit_sequence)?,
            letter_sequence: env_threshold("PWD_LETTER_SEQUENCE", defaults.letter_sequence)?,
            symbols: defaults.symbols,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("Check configuration loaded from environment: {:?}", config);

        Ok(config)
    }
}

fn env_usize(var: &'static str) -> Result<Option<usize>> {
    match std::env::var(var) {
        Ok(value) => {
            let parsed = value.trim().parse::<usize>();
            parsed
                .map(Some)
                .map_err(|_| ValidatorError::Environment { var, value })
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(ValidatorError::Environment {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn env_threshold(var: &'static str, default: Threshold) -> Result<Threshold> {
    match env_usize(var)? {
        Some(value) => Threshold::new(var, value),
        None => Ok(default),
    }
}
