//! Presence rules - digits, letters, symbols and mixed case.

use super::is_decimal_digit;
use crate::config::SymbolSet;

pub fn has_digit(password: &str) -> bool {
    password.chars().any(is_decimal_digit)
}

pub fn has_letter(password: &str) -> bool {
    password.chars().any(char::is_alphabetic)
}

pub fn has_symbol(password: &str, symbols: &SymbolSet) -> bool {
    password.chars().any(|c| symbols.contains(c))
}

/// Passes when at least one uppercase and one lowercase letter appear anywhere.
pub fn has_mixed_case(password: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;
    for c in password.chars() {
        has_upper |= c.is_uppercase();
        has_lower |= c.is_lowercase();
        if has_upper && has_lower {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_digit() {
        assert!(has_digit("test1"));
        assert!(has_digit("٣"));
        assert!(!has_digit("test"));
        assert!(!has_digit(""));
        assert!(!has_digit("pass½Ⅻ²"));
    }

    #[test]
    fn test_has_letter() {
        assert!(has_letter("1234a"));
        assert!(has_letter("ø"));
        assert!(!has_letter("1234!"));
    }

    #[test]
    fn test_has_symbol_default_set() {
        let symbols = SymbolSet::default();
        for pwd in ["test@", "@test", "te@st", "#####", "%&^!@)((*;'"] {
            assert!(has_symbol(pwd, &symbols), "{pwd}");
        }
        assert!(!has_symbol("test123", &symbols));
    }

    #[test]
    fn test_has_symbol_listed_set() {
        let symbols = SymbolSet::common();
        assert!(has_symbol("pass§word", &symbols));
        assert!(!has_symbol("pass word", &symbols));
    }

    #[test]
    fn test_has_mixed_case() {
        assert!(!has_mixed_case("AAA"));
        assert!(!has_mixed_case("aaa"));
        assert!(!has_mixed_case("1234"));
        assert!(has_mixed_case("aA"));
        assert!(has_mixed_case("AbC"));
        assert!(has_mixed_case("Øø"));
        assert!(has_mixed_case("æØæ"));
    }
}
