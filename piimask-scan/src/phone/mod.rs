// piimask-scan/src/phone/mod.rs
//! North American phone number detection.
//!
//! Ten digits grouped 3-3-4 in one of three shapes: `801-111-1111`,
//! `(801)111-1111`, or a bare `8011111111`. A `+` country code may sit right
//! in front of the number; it is never part of the reported span.

use crate::context::{clean_trailing_edge, digit_run, is_alpha, is_digit, peek, peek_before};
use crate::detector::{Category, Detector};
use crate::span::MatchAccumulator;

const DASHED_LEN: usize = 12;
const PARENTHESIZED_LEN: usize = 13;
const BARE_LEN: usize = 10;

/// True when the digits ending at `end` are a 1-3 digit run introduced by `+`.
fn country_code_ends_at(input: &[u8], end: usize) -> bool {
    let mut start = end;
    while start > 0 && is_digit(input[start - 1]) {
        start -= 1;
    }
    (1..=3).contains(&(end - start)) && peek_before(input, start) == Some(b'+')
}

/// Left-edge check allowing a `+1`, `+1-` or `+1 ` country code.
fn clean_prefix(input: &[u8], start: usize) -> bool {
    match peek_before(input, start) {
        None => true,
        Some(b) if is_alpha(b) => false,
        Some(b) if is_digit(b) => country_code_ends_at(input, start),
        Some(b'-' | b' ') if peek_before(input, start - 1).is_some_and(is_digit) => {
            country_code_ends_at(input, start - 1)
        }
        Some(_) => true,
    }
}

fn parenthesized(input: &[u8], at: usize) -> Option<usize> {
    let shaped = digit_run(input, at + 1) == 3
        && peek(input, at + 4) == Some(b')')
        && digit_run(input, at + 5) == 3
        && peek(input, at + 8) == Some(b'-')
        && digit_run(input, at + 9) == 4;

    (shaped && clean_prefix(input, at) && clean_trailing_edge(input, at + PARENTHESIZED_LEN, b"-"))
        .then_some(PARENTHESIZED_LEN)
}

fn dashed(input: &[u8], at: usize) -> Option<usize> {
    let shaped = digit_run(input, at) == 3
        && peek(input, at + 3) == Some(b'-')
        && digit_run(input, at + 4) == 3
        && peek(input, at + 7) == Some(b'-')
        && digit_run(input, at + 8) == 4;

    (shaped && clean_trailing_edge(input, at + DASHED_LEN, b"-")).then_some(DASHED_LEN)
}

fn bare(input: &[u8], at: usize) -> Option<usize> {
    let shaped = digit_run(input, at) == BARE_LEN && peek_before(input, at) != Some(b'+');

    (shaped && clean_trailing_edge(input, at + BARE_LEN, b"-")).then_some(BARE_LEN)
}

/// Length of the phone number starting at `at`, if one does.
fn match_at(input: &[u8], at: usize) -> Option<usize> {
    match input[at] {
        b'(' => parenthesized(input, at),
        b if is_digit(b) => {
            if peek_before(input, at).is_some_and(is_digit) || !clean_prefix(input, at) {
                return None;
            }
            dashed(input, at).or_else(|| bare(input, at))
        }
        _ => None,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneDetector;

impl Detector for PhoneDetector {
    fn category(&self) -> Category {
        Category::Phone
    }

    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator) {
        let mut at = 0;
        while at < input.len() {
            match match_at(input, at) {
                Some(len) => {
                    acc.push(Category::Phone, at, len);
                    at += len;
                }
                None => at += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;
    use alloc::vec::Vec;

    fn spans(input: &str) -> Vec<Span> {
        let mut acc = MatchAccumulator::new(input.len());
        PhoneDetector.scan(input.as_bytes(), &mut acc);
        acc.into_findings().into_iter().map(|f| f.span).collect()
    }

    #[test]
    fn test_dashed_and_country_code_forms() {
        let input = "801-111-1111 and (801) 111-1111 +1(801)111-1111 taco";
        assert_eq!(spans(input), [Span::new(0, 12), Span::new(34, 13)]);
    }

    #[test]
    fn test_country_code_with_separator() {
        assert_eq!(spans("+1 801-111-1111"), [Span::new(3, 12)]);
        assert_eq!(spans("+44-801-111-1111"), [Span::new(4, 12)]);
        assert!(spans("12 801-111-1111").is_empty());
    }

    #[test]
    fn test_bare_ten_digits() {
        assert_eq!(spans("call 8011111111."), [Span::new(5, 10)]);
        assert!(spans("18011111111").is_empty());
        assert!(spans("+8011111111").is_empty());
        assert!(spans("4111111111111111").is_empty());
    }

    #[test]
    fn test_rejections() {
        assert!(spans("40512-4618").is_empty());
        assert!(spans("405-124618").is_empty());
        assert!(spans("This is not valid: 801 111 1111").is_empty());
        assert!(spans("(801) 111-1111").is_empty());
        assert!(spans("801-111-1111-22").is_empty());
        assert!(spans("x801-111-1111").is_empty());
        assert!(spans("801-111-1111x").is_empty());
        assert!(spans("5(801)111-1111").is_empty());
    }
}
