//! Built-in check identifiers.
//!
//! [`CheckKind`] names exactly one built-in rule. [`CheckKinds`] is the
//! bit-flag set used to add or remove several rules at once.

use std::fmt;

use bitflags::bitflags;

use crate::error::{Result, ValidatorError};

/// A single built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckKind {
    Length,
    Digits,
    Letters,
    Symbols,
    CaseMixed,
    DigitSequence,
    DigitRepetition,
    DigitPosition,
    LetterSequence,
    LetterRepetition,
    SymbolRepetition,
}

impl CheckKind {
    /// Every built-in kind, in ascending flag order.
    pub const ALL: [CheckKind; 11] = [
        CheckKind::Length,
        CheckKind::Digits,
        CheckKind::Letters,
        CheckKind::Symbols,
        CheckKind::CaseMixed,
        CheckKind::DigitSequence,
        CheckKind::DigitRepetition,
        CheckKind::DigitPosition,
        CheckKind::LetterSequence,
        CheckKind::LetterRepetition,
        CheckKind::SymbolRepetition,
    ];

    /// The flag representing this kind inside a [`CheckKinds`] set.
    pub const fn flag(self) -> CheckKinds {
        match self {
            CheckKind::Length => CheckKinds::LENGTH,
            CheckKind::Digits => CheckKinds::DIGITS,
            CheckKind::Letters => CheckKinds::LETTERS,
            CheckKind::Symbols => CheckKinds::SYMBOLS,
            CheckKind::CaseMixed => CheckKinds::CASE_MIXED,
            CheckKind::DigitSequence => CheckKinds::DIGIT_SEQUENCE,
            CheckKind::DigitRepetition => CheckKinds::DIGIT_REPETITION,
            CheckKind::DigitPosition => CheckKinds::DIGIT_POSITION,
            CheckKind::LetterSequence => CheckKinds::LETTER_SEQUENCE,
            CheckKind::LetterRepetition => CheckKinds::LETTER_REPETITION,
            CheckKind::SymbolRepetition => CheckKinds::SYMBOL_REPETITION,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CheckKind::Length => "length",
            CheckKind::Digits => "digits",
            CheckKind::Letters => "letters",
            CheckKind::Symbols => "symbols",
            CheckKind::CaseMixed => "case-mixed",
            CheckKind::DigitSequence => "digit-sequence",
            CheckKind::DigitRepetition => "digit-repetition",
            CheckKind::DigitPosition => "digit-position",
            CheckKind::LetterSequence => "letter-sequence",
            CheckKind::LetterRepetition => "letter-repetition",
            CheckKind::SymbolRepetition => "symbol-repetition",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CheckKind> for CheckKinds {
    fn from(kind: CheckKind) -> Self {
        kind.flag()
    }
}

impl TryFrom<CheckKinds> for CheckKind {
    type Error = ValidatorError;

    /// Succeeds only for a set holding exactly one defined flag.
    fn try_from(kinds: CheckKinds) -> Result<Self> {
        if !kinds.is_single_flag() {
            return Err(ValidatorError::not_single(kinds.bits()));
        }
        CheckKind::ALL
            .into_iter()
            .find(|kind| kind.flag() == kinds)
            .ok_or_else(|| ValidatorError::out_of_range(kinds.bits()))
    }
}

bitflags! {
    /// A set of built-in rules.
    ///
    /// Undefined bits can be carried with [`CheckKinds::from_bits_retain`];
    /// the validator rejects such sets with [`ValidatorError::InvalidArgument`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct CheckKinds: u32 {
        const LENGTH = 1 << 0;
        const DIGITS = 1 << 1;
        const LETTERS = 1 << 2;
        const SYMBOLS = 1 << 3;
        const CASE_MIXED = 1 << 4;
        const DIGIT_SEQUENCE = 1 << 5;
        const DIGIT_REPETITION = 1 << 6;
        const DIGIT_POSITION = 1 << 7;
        const LETTER_SEQUENCE = 1 << 8;
        const LETTER_REPETITION = 1 << 9;
        const SYMBOL_REPETITION = 1 << 10;

        /// Length, digits, letters, symbols and case mixing.
        const BASIC = 0b000_0001_1111;
        const ADVANCED = 0b111_1111_1111;
        const ALL = 0b111_1111_1111;
    }
}

impl CheckKinds {
    pub const NONE: CheckKinds = CheckKinds::empty();

    /// True when the raw value lies between [`CheckKinds::NONE`] and [`CheckKinds::ALL`].
    pub const fn is_in_range(self) -> bool {
        self.bits() <= CheckKinds::ALL.bits()
    }

    /// True when exactly one bit is set.
    pub const fn is_single_flag(self) -> bool {
        let bits = self.bits();
        bits != 0 && bits & (bits - 1) == 0
    }

    /// Iterates the defined single kinds present in this set, lowest bit first.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn active_checks(self) -> ActiveChecks {
        ActiveChecks {
            kinds: self,
            next: 0,
        }
    }
}

/// Iterator returned by [`CheckKinds::active_checks`].
#[derive(Debug, Clone)]
pub struct ActiveChecks {
    kinds: CheckKinds,
    next: usize,
}

impl Iterator for ActiveChecks {
    type Item = CheckKind;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&kind) = CheckKind::ALL.get(self.next) {
            self.next += 1;
            if self.kinds.contains(kind.flag()) {
                return Some(kind);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_declaration_order() {
        for (bit, kind) in CheckKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.flag().bits(), 1 << bit, "{kind}");
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(CheckKinds::NONE.bits(), 0);
        assert_eq!(CheckKinds::ADVANCED, CheckKinds::ALL);
        assert_eq!(
            CheckKinds::BASIC,
            CheckKinds::LENGTH
                | CheckKinds::DIGITS
                | CheckKinds::LETTERS
                | CheckKinds::SYMBOLS
                | CheckKinds::CASE_MIXED
        );
        assert_eq!(CheckKinds::ALL.active_checks().count(), 11);
    }

    #[test]
    fn test_is_in_range() {
        assert!(CheckKinds::NONE.is_in_range());
        assert!(CheckKinds::ALL.is_in_range());
        assert!(CheckKinds::BASIC.is_in_range());
        assert!(!CheckKinds::from_bits_retain(1 << 11).is_in_range());
        assert!(!CheckKinds::from_bits_retain(u32::MAX).is_in_range());
    }

    #[test]
    fn test_is_single_flag() {
        assert!(CheckKinds::LENGTH.is_single_flag());
        assert!(CheckKinds::SYMBOL_REPETITION.is_single_flag());
        assert!(CheckKinds::from_bits_retain(1 << 11).is_single_flag());
        assert!(!CheckKinds::NONE.is_single_flag());
        assert!(!CheckKinds::BASIC.is_single_flag());
        assert!(!(CheckKinds::DIGITS | CheckKinds::LETTERS).is_single_flag());
    }

    #[test]
    fn test_active_checks_ascending_and_restartable() {
        let kinds = CheckKinds::SYMBOL_REPETITION | CheckKinds::LENGTH | CheckKinds::DIGIT_POSITION;
        let iter = kinds.active_checks();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(
            first,
            vec![
                CheckKind::Length,
                CheckKind::DigitPosition,
                CheckKind::SymbolRepetition
            ]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_active_checks_ignores_undefined_bits() {
        let kinds = CheckKinds::from_bits_retain((1 << 11) | 1);
        assert_eq!(kinds.active_checks().collect::<Vec<_>>(), vec![CheckKind::Length]);
        assert_eq!(CheckKinds::NONE.active_checks().next(), None);
    }

    #[test]
    fn test_try_from_single_kind() {
        assert_eq!(
            CheckKind::try_from(CheckKinds::LETTER_SEQUENCE),
            Ok(CheckKind::LetterSequence)
        );
        assert!(matches!(
            CheckKind::try_from(CheckKinds::BASIC),
            Err(ValidatorError::InvalidArgument { .. })
        ));
        assert!(matches!(
            CheckKind::try_from(CheckKinds::from_bits_retain(1 << 11)),
            Err(ValidatorError::InvalidArgument { value, .. }) if value == 1 << 11
        ));
    }
}
