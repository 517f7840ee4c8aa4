//! Digit position rule - digits must not sit only at the edges.

use super::is_decimal_digit;

/// Passes when some digit has a non-digit somewhere before it and somewhere after it.
pub fn digit_position(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let first = chars.iter().position(|&c| !is_decimal_digit(c));
    let last = chars.iter().rposition(|&c| !is_decimal_digit(c));

    match (first, last) {
        (Some(first), Some(last)) if first < last => {
            chars[first + 1..last].iter().any(|&c| is_decimal_digit(c))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_position_no_digit() {
        assert!(!digit_position("test"));
        assert!(!digit_position(""));
        assert!(!digit_position("pa½ss"));
    }

    #[test]
    fn test_digit_position_edges_only() {
        assert!(!digit_position("123test"));
        assert!(!digit_position("test123"));
        assert!(!digit_position("123test123"));
        assert!(!digit_position("12345"));
    }

    #[test]
    fn test_digit_position_middle() {
        assert!(digit_position("te123st"));
        assert!(digit_position("1a2b"));
        assert!(digit_position("a1b"));
    }
}
