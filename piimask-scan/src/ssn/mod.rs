// piimask-scan/src/ssn/mod.rs
//! US Social Security Number detection: `123-12-1234` or `123 12 1234`.

use crate::context::{
    clean_leading_edge, clean_trailing_edge, digit_run, is_digit, parse_digits, peek, peek_before,
};
use crate::detector::{Category, Detector};
use crate::span::MatchAccumulator;
use crate::validate::is_valid_ssn_parts;

const SSN_LEN: usize = 11;

fn match_at(input: &[u8], at: usize) -> Option<usize> {
    // Only the first digit of a run can open a match.
    if peek_before(input, at).is_some_and(is_digit) || digit_run(input, at) != 3 {
        return None;
    }
    let sep = peek(input, at + 3).filter(|&b| matches!(b, b'-' | b' '))?;
    let shaped = digit_run(input, at + 4) == 2
        && peek(input, at + 6) == Some(sep)
        && digit_run(input, at + 7) == 4;
    if !shaped {
        return None;
    }

    let joiner = [sep];
    if !clean_leading_edge(input, at, &joiner) || !clean_trailing_edge(input, at + SSN_LEN, &joiner) {
        return None;
    }

    let area = parse_digits(input, at, 3);
    let group = parse_digits(input, at + 4, 2);
    let serial = parse_digits(input, at + 7, 4);
    is_valid_ssn_parts(area, group, serial).then_some(SSN_LEN)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SsnDetector;

impl Detector for SsnDetector {
    fn category(&self) -> Category {
        Category::Ssn
    }

    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator) {
        let mut at = 0;
        while at < input.len() {
            match match_at(input, at) {
                Some(len) => {
                    acc.push(Category::Ssn, at, len);
                    at += len;
                }
                None => at += 1,
            }
        }
    }
}
