//! Built-in password rules
//!
//! Each submodule implements one family of rules as plain functions over
//! `&str`. [`Rule`] ties a [`CheckKind`] to its configuration and dispatches
//! to those functions.

mod length;
mod position;
mod presence;
mod repetition;
mod sequence;

pub use length::length_rule;
pub use position::digit_position;
pub use presence::{has_digit, has_letter, has_mixed_case, has_symbol};
pub use repetition::{digit_repetition, letter_repetition, symbol_repetition};
pub use sequence::{digit_sequence, letter_sequence};

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::config::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, SymbolSet, Threshold};
use crate::kind::CheckKind;

/// A Unicode decimal digit (general category Nd).
///
/// Narrower than [`char::is_numeric`], which also accepts numerals such as
/// `½`, `Ⅻ` or `①`.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// A built-in rule together with its configuration.
///
/// Configuration can be changed after construction; [`Rule::execute`] always
/// reads the current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Length { min: usize, max: usize },
    Digits,
    Letters,
    Symbols { symbols: SymbolSet },
    CaseMixed,
    DigitSequence { threshold: Threshold },
    DigitRepetition { threshold: Threshold },
    DigitPosition,
    LetterSequence { threshold: Threshold },
    LetterRepetition { threshold: Threshold },
    SymbolRepetition { threshold: Threshold, symbols: SymbolSet },
}

impl Rule {
    /// A length rule with the default bounds (8..=128).
    pub fn length() -> Self {
        Rule::Length {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn kind(&self) -> CheckKind {
        match self {
            Rule::Length { .. } => CheckKind::Length,
            Rule::Digits => CheckKind::Digits,
            Rule::Letters => CheckKind::Letters,
            Rule::Symbols { .. } => CheckKind::Symbols,
            Rule::CaseMixed => CheckKind::CaseMixed,
            Rule::DigitSequence { .. } => CheckKind::DigitSequence,
            Rule::DigitRepetition { .. } => CheckKind::DigitRepetition,
            Rule::DigitPosition => CheckKind::DigitPosition,
            Rule::LetterSequence { .. } => CheckKind::LetterSequence,
            Rule::LetterRepetition { .. } => CheckKind::LetterRepetition,
            Rule::SymbolRepetition { .. } => CheckKind::SymbolRepetition,
        }
    }

    /// Runs the rule. `true` means the password passed.
    pub fn execute(&self, password: &str) -> bool {
        match self {
            Rule::Length { min, max } => length_rule(password, *min, *max),
            Rule::Digits => has_digit(password),
            Rule::Letters => has_letter(password),
            Rule::Symbols { symbols } => has_symbol(password, symbols),
            Rule::CaseMixed => has_mixed_case(password),
            Rule::DigitSequence { threshold } => digit_sequence(password, threshold.get()),
            Rule::DigitRepetition { threshold } => digit_repetition(password, threshold.get()),
            Rule::DigitPosition => digit_position(password),
            Rule::LetterSequence { threshold } => letter_sequence(password, threshold.get()),
            Rule::LetterRepetition { threshold } => letter_repetition(password, threshold.get()),
            Rule::SymbolRepetition { threshold, symbols } => {
                symbol_repetition(password, threshold.get(), symbols)
            }
        }
    }

    /// The run threshold of a repetition or sequence rule.
    pub fn threshold(&self) -> Option<Threshold> {
        match self {
            Rule::DigitSequence { threshold }
            | Rule::DigitRepetition { threshold }
            | Rule::LetterSequence { threshold }
            | Rule::LetterRepetition { threshold }
            | Rule::SymbolRepetition { threshold, .. } => Some(*threshold),
            _ => None,
        }
    }

    /// Replaces the threshold. Returns `false` if the rule has none.
    pub fn set_threshold(&mut self, value: Threshold) -> bool {
        match self {
            Rule::DigitSequence { threshold }
            | Rule::DigitRepetition { threshold }
            | Rule::LetterSequence { threshold }
            | Rule::LetterRepetition { threshold }
            | Rule::SymbolRepetition { threshold, .. } => {
                *threshold = value;
                true
            }
            _ => false,
        }
    }

    /// Replaces the length bounds. Returns `false` for anything but a length rule.
    pub fn set_length_bounds(&mut self, new_min: usize, new_max: usize) -> bool {
        match self {
            Rule::Length { min, max } => {
                *min = new_min;
                *max = new_max;
                true
            }
            _ => false,
        }
    }

    /// Replaces the symbol set. Returns `false` for rules that do not use one.
    pub fn set_symbols(&mut self, value: SymbolSet) -> bool {
        match self {
            Rule::Symbols { symbols } | Rule::SymbolRepetition { symbols, .. } => {
                *symbols = value;
                true
            }
            _ => false,
        }
    }
}
