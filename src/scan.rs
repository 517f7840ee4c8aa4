//! Run scanners shared by the repetition and sequence rules.
//!
//! Both make a single left-to-right pass and keep only the previous
//! qualifying character and the current run length.

/// Direction of a code point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Each character is one code point above the previous one (`1234`).
    Ascending,
    /// Each character is one code point below the previous one (`4321`).
    Descending,
}

impl Direction {
    const fn step(self) -> i64 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }
}

/// Returns `false` once `threshold` identical qualifying characters appear in a row.
///
/// Characters rejected by `qualifies` break the run. Input without any
/// qualifying character passes.
pub fn repetition_check<I, P>(chars: I, threshold: usize, qualifies: P) -> bool
where
    I: IntoIterator<Item = char>,
    P: Fn(char) -> bool,
{
    let mut previous: Option<char> = None;
    let mut run = 0usize;

    for c in chars {
        if !qualifies(c) {
            previous = None;
            run = 0;
            continue;
        }

        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }

        if run >= threshold {
            return false;
        }
    }
    true
}

/// Returns `true` once `threshold` qualifying characters form a sequence in `direction`.
///
/// Characters rejected by `qualifies` break the run.
pub fn contains_sequence<I, P>(chars: I, threshold: usize, direction: Direction, qualifies: P) -> bool
where
    I: IntoIterator<Item = char>,
    P: Fn(char) -> bool,
{
    let mut previous: Option<char> = None;
    let mut run = 0usize;

    for c in chars {
        if !qualifies(c) {
            previous = None;
            run = 0;
            continue;
        }

        run = match previous {
            Some(p) if i64::from(u32::from(c)) - i64::from(u32::from(p)) == direction.step() => run + 1,
            _ => 1,
        };
        previous = Some(c);

        if run >= threshold {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    #[test]
    fn test_repetition_two_adjacent_digits() {
        assert!(!repetition_check("ab11cd".chars(), 2, is_digit));
        assert!(repetition_check("1a1b1".chars(), 2, is_digit));
        assert!(repetition_check("aabb".chars(), 2, is_digit));
    }

    #[test]
    fn test_repetition_threshold_boundary() {
        for threshold in 2..8 {
            let below = "7".repeat(threshold - 1);
            let at = "7".repeat(threshold);
            assert!(repetition_check(below.chars(), threshold, is_digit), "{below}");
            assert!(!repetition_check(at.chars(), threshold, is_digit), "{at}");
        }
    }

    #[test]
    fn test_repetition_broken_by_non_qualifying() {
        assert!(repetition_check("111a1".chars(), 4, is_digit));
        assert!(repetition_check("1112111".chars(), 4, is_digit));
        assert!(!repetition_check("x1111x".chars(), 4, is_digit));
    }

    #[test]
    fn test_repetition_empty_or_no_qualifying() {
        assert!(repetition_check("".chars(), 2, is_digit));
        assert!(repetition_check("aaaaaa".chars(), 2, is_digit));
    }

    #[test]
    fn test_sequence_directions() {
        assert!(contains_sequence("1234".chars(), 4, Direction::Ascending, is_digit));
        assert!(!contains_sequence("1234".chars(), 4, Direction::Descending, is_digit));
        assert!(contains_sequence("4321".chars(), 4, Direction::Descending, is_digit));
        assert!(!contains_sequence("4321".chars(), 4, Direction::Ascending, is_digit));
    }

    #[test]
    fn test_sequence_threshold() {
        assert!(!contains_sequence("1234".chars(), 5, Direction::Ascending, is_digit));
        assert!(contains_sequence("x12345x".chars(), 5, Direction::Ascending, is_digit));
    }

    #[test]
    fn test_sequence_restarts() {
        assert!(!contains_sequence("12a34".chars(), 3, Direction::Ascending, is_digit));
        assert!(!contains_sequence("1224".chars(), 3, Direction::Ascending, is_digit));
        assert!(contains_sequence("91234".chars(), 4, Direction::Ascending, is_digit));
        assert!(!contains_sequence("".chars(), 2, Direction::Ascending, is_digit));
    }
}
