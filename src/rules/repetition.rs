//! Repetition rules - reject runs of the same digit, letter or symbol.

use super::is_decimal_digit;
use crate::config::SymbolSet;
use crate::scan::repetition_check;

/// Lowercases a character, keeping it as-is when the mapping is not a single char.
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

pub fn digit_repetition(password: &str, threshold: usize) -> bool {
    repetition_check(password.chars(), threshold, is_decimal_digit)
}

/// Letters compare case-insensitively, so `aAaA` is a run of four.
pub fn letter_repetition(password: &str, threshold: usize) -> bool {
    repetition_check(password.chars().map(fold_case), threshold, char::is_alphabetic)
}

pub fn symbol_repetition(password: &str, threshold: usize, symbols: &SymbolSet) -> bool {
    repetition_check(password.chars(), threshold, |c| symbols.contains(c))
}
