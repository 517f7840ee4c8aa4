//! Check factory - builds built-in rules from a kind and the current configuration.

use crate::config::CheckConfig;
use crate::error::{Result, ValidatorError};
use crate::kind::{CheckKind, CheckKinds};
use crate::rules::Rule;

type Constructor = fn(&CheckConfig) -> Rule;

/// One constructor per built-in kind, in flag order.
static CONSTRUCTORS: [(CheckKind, Constructor); 11] = [
    (CheckKind::Length, |c| Rule::Length {
        min: c.min_length,
        max: c.max_length,
    }),
    (CheckKind::Digits, |_| Rule::Digits),
    (CheckKind::Letters, |_| Rule::Letters),
    (CheckKind::Symbols, |c| Rule::Symbols {
        symbols: c.symbols.clone(),
    }),
    (CheckKind::CaseMixed, |_| Rule::CaseMixed),
    (CheckKind::DigitSequence, |c| Rule::DigitSequence {
        threshold: c.digit_sequence,
    }),
    (CheckKind::DigitRepetition, |c| Rule::DigitRepetition {
        threshold: c.digit_repetition,
    }),
    (CheckKind::DigitPosition, |_| Rule::DigitPosition),
    (CheckKind::LetterSequence, |c| Rule::LetterSequence {
        threshold: c.letter_sequence,
    }),
    (CheckKind::LetterRepetition, |c| Rule::LetterRepetition {
        threshold: c.letter_repetition,
    }),
    (CheckKind::SymbolRepetition, |c| Rule::SymbolRepetition {
        threshold: c.symbol_repetition,
        symbols: c.symbols.clone(),
    }),
];

/// Builds the rule for `kind`, injecting the fields of `config` it uses.
pub fn build(kind: CheckKind, config: &CheckConfig) -> Rule {
    // CONSTRUCTORS is indexed in the same order as CheckKind::ALL.
    let (_, constructor) = CONSTRUCTORS[kind as usize];
    constructor(config)
}

/// Builds the rule for a set that must hold exactly one defined flag.
///
/// # Errors
///
/// [`ValidatorError::InvalidArgument`] for an empty set, a preset or
/// combination of flags, or a single bit with no rule behind it.
pub fn create(kinds: CheckKinds, config: &CheckConfig) -> Result<Rule> {
    if !kinds.is_single_flag() {
        return Err(ValidatorError::not_single(kinds.bits()));
    }
    let kind = CheckKind::try_from(kinds)?;
    Ok(build(kind, config))
}
