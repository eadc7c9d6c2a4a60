// piimask-scan/src/context/mod.rs
//! Byte classification and the boundary checks shared by the detectors.
//!
//! A candidate is only reported when it is cleanly separated from its
//! surroundings: no letter or digit glued to either edge, and no separator that
//! would chain it onto a neighbouring digit group.

/// `'0'..='9'`
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII letters only.
#[inline]
pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

#[inline]
pub fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Length of the run of ASCII digits starting at `at`.
pub fn digit_run(input: &[u8], at: usize) -> usize {
    input
        .get(at..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| is_digit(b)).count())
}

/// Parses `len` ASCII digits starting at `at`. The caller guarantees they are digits.
pub fn parse_digits(input: &[u8], at: usize, len: usize) -> u32 {
    input[at..at + len]
        .iter()
        .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

/// True when exactly `len` digits start at `at` and no further digit follows them.
pub fn exact_digits(input: &[u8], at: usize, len: usize) -> bool {
    digit_run(input, at) == len
}

/// The byte at `at`, if any.
#[inline]
pub fn peek(input: &[u8], at: usize) -> Option<u8> {
    input.get(at).copied()
}

/// The byte immediately before `at`, if any.
#[inline]
pub fn peek_before(input: &[u8], at: usize) -> Option<u8> {
    at.checked_sub(1).and_then(|i| input.get(i).copied())
}

/// Checks the left edge of a candidate starting at `start`.
///
/// Rejects a letter or digit directly before it, and a byte from `joiners`
/// directly before it when that byte is itself preceded by a digit.
pub fn clean_leading_edge(input: &[u8], start: usize, joiners: &[u8]) -> bool {
    match peek_before(input, start) {
        None => true,
        Some(b) if is_alnum(b) => false,
        Some(b) if joiners.contains(&b) => {
            !peek_before(input, start - 1).is_some_and(is_digit)
        }
        Some(_) => true,
    }
}

/// Checks the right edge of a candidate ending (exclusive) at `end`.
///
/// Mirror image of [`clean_leading_edge`].
pub fn clean_trailing_edge(input: &[u8], end: usize, joiners: &[u8]) -> bool {
    match peek(input, end) {
        None => true,
        Some(b) if is_alnum(b) => false,
        Some(b) if joiners.contains(&b) => !peek(input, end + 1).is_some_and(is_digit),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_run_stops_at_non_digit() {
        assert_eq!(digit_run(b"12345-6", 0), 5);
        assert_eq!(digit_run(b"12345-6", 5), 0);
        assert_eq!(digit_run(b"12", 7), 0);
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits(b"x1982/", 1, 4), 1982);
        assert_eq!(parse_digits(b"07", 0, 2), 7);
    }

    #[test]
    fn test_leading_edge() {
        assert!(clean_leading_edge(b"abc", 0, b"-"));
        assert!(clean_leading_edge(b" 123", 1, b"-"));
        assert!(!clean_leading_edge(b"a123", 1, b"-"));
        assert!(!clean_leading_edge(b"5-123", 2, b"-"));
        assert!(clean_leading_edge(b"x-123", 2, b"-"));
    }

    #[test]
    fn test_trailing_edge() {
        assert!(clean_trailing_edge(b"123", 3, b"-"));
        assert!(clean_trailing_edge(b"123. ", 3, b"-"));
        assert!(!clean_trailing_edge(b"123a", 3, b"-"));
        assert!(!clean_trailing_edge(b"123-4", 3, b"-"));
        assert!(clean_trailing_edge(b"123- ", 3, b"-"));
    }
}
