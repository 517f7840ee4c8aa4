//! Length rule - checks the trimmed password length against inclusive bounds.

/// Passes when the password, trimmed of surrounding whitespace, is non-empty
/// and its length in characters is within `min..=max`.
pub fn length_rule(password: &str, min: usize, max: usize) -> bool {
    let trimmed = password.trim();
    if trimmed.is_empty() {
        return false;
    }
    let len = trimmed.chars().count();
    len >= min && len <= max
}
