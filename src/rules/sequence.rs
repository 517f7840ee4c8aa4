//! Sequence rules - reject runs like `1234`, `6543` or `abcd`.

use super::is_decimal_digit;
use super::repetition::fold_case;
use crate::scan::{Direction, contains_sequence};

/// Fails on an ascending or descending digit run of `threshold` or more.
pub fn digit_sequence(password: &str, threshold: usize) -> bool {
    [Direction::Ascending, Direction::Descending]
        .into_iter()
        .all(|direction| !contains_sequence(password.chars(), threshold, direction, is_decimal_digit))
}

/// Fails on an ascending run of Latin letters, ignoring case.
pub fn letter_sequence(password: &str, threshold: usize) -> bool {
    !contains_sequence(
        password.chars().map(fold_case),
        threshold,
        Direction::Ascending,
        |c| c.is_ascii_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sequence_three_passes() {
        for pwd in ["123test", "te123st", "test123"] {
            assert!(digit_sequence(pwd, 4), "{pwd}");
        }
    }

    #[test]
    fn test_digit_sequence_four_fails_both_directions() {
        for pwd in ["2345test", "te2345st", "test2345", "6543test", "te6543st", "test6543"] {
            assert!(!digit_sequence(pwd, 4), "{pwd}");
        }
    }

    #[test]
    fn test_digit_sequence_threshold_five() {
        for pwd in ["6543test", "te6543st", "test1234", "test"] {
            assert!(digit_sequence(pwd, 5), "{pwd}");
        }
        for pwd in ["te98765st", "test12345"] {
            assert!(!digit_sequence(pwd, 5), "{pwd}");
        }
    }

    #[test]
    fn test_digit_sequence_ignores_other_numerals() {
        assert!(digit_sequence("x①②③④x", 4));
        assert!(digit_sequence("ⅠⅡⅢⅣ", 4));
        assert!(!digit_sequence("x٣٤٥٦x", 4));
    }

    #[test]
    fn test_letter_sequence() {
        assert!(!letter_sequence("testabcd", 4));
        assert!(!letter_sequence("wXyZ", 4));
        assert!(letter_sequence("abc", 4));
        assert!(!letter_sequence("abc", 3));
        assert!(!letter_sequence("xyztest", 3));
    }

    #[test]
    fn test_letter_sequence_ascending_only() {
        assert!(letter_sequence("dcba", 4));
        assert!(letter_sequence("zyxw", 4));
    }

    #[test]
    fn test_letter_sequence_ignores_non_latin() {
        assert!(letter_sequence("ab1cd", 4));
        assert!(letter_sequence("αβγδ", 4));
    }
}
