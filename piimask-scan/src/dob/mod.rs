// piimask-scan/src/dob/mod.rs
//! Date-of-birth detection.
//!
//! Two shapes are recognised:
//!
//! * numeric, `/` or `-` used consistently, with a four-digit year either first
//!   (`1982/11/8`) or last (`12-01-1998`, read day first);
//! * textual, `April 3, 2019`: month name, day, optional comma, year. The
//!   month name through the day is reported; the year stays visible.
//!
//! Two-digit years are ambiguous and never reported.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};

use crate::context::{
    clean_leading_edge, clean_trailing_edge, digit_run, is_alnum, is_alpha, is_digit, parse_digits,
    peek, peek_before,
};
use crate::detector::{Category, Detector};
use crate::span::MatchAccumulator;
use crate::validate::is_valid_date;

const SEPARATORS: &[u8] = b"/-";

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// A month name found on word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthToken {
    pub start: usize,
    pub end: usize,
    pub month: u32,
}

/// Finds month names, case-insensitively, with word-boundary awareness.
pub struct MonthScanner {
    automaton: DoubleArrayAhoCorasick<u32>,
}

impl fmt::Debug for MonthScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthScanner")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .finish()
    }
}

impl Default for MonthScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthScanner {
    pub fn new() -> Self {
        let automaton = DoubleArrayAhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build_with_values(MONTH_NAMES)
            .expect("Failed to build Aho-Corasick automaton for month names");

        Self { automaton }
    }

    /// Month names in `input` that are not glued to other letters or digits.
    pub fn find_months(&self, input: &[u8]) -> Vec<MonthToken> {
        let lowered = input.to_ascii_lowercase();
        self.automaton
            .leftmost_find_iter(&lowered)
            .filter(|m| {
                let prefix_ok = !peek_before(input, m.start()).is_some_and(is_alnum);
                let suffix_ok = !peek(input, m.end()).is_some_and(is_alpha);
                prefix_ok && suffix_ok
            })
            .map(|m| MonthToken {
                start: m.start(),
                end: m.end(),
                month: m.value(),
            })
            .collect()
    }
}

/// `Month day[,] yyyy`; returns the length of the masked part.
fn textual_at(input: &[u8], token: MonthToken) -> Option<usize> {
    let mut at = token.end;
    if peek(input, at) == Some(b'.') {
        at += 1;
    }
    if peek(input, at) != Some(b' ') {
        return None;
    }
    at += 1;

    let day_len = digit_run(input, at);
    if !(1..=2).contains(&day_len) {
        return None;
    }
    let day = parse_digits(input, at, day_len);
    at += day_len;

    let mut end = at;
    if peek(input, at) == Some(b',') {
        at += 1;
        end = at;
    }

    if peek(input, at) != Some(b' ') || digit_run(input, at + 1) != 4 {
        return None;
    }
    let year = parse_digits(input, at + 1, 4);
    if peek(input, at + 5).is_some_and(is_alnum) {
        return None;
    }

    is_valid_date(year, token.month, day).then_some(end - token.start)
}

/// `yyyy/m/d` or `d/m/yyyy` starting at `at`; returns the match length.
fn numeric_at(input: &[u8], at: usize) -> Option<usize> {
    if !clean_leading_edge(input, at, SEPARATORS) {
        return None;
    }

    let first = digit_run(input, at);
    let sep = peek(input, at + first).filter(|b| SEPARATORS.contains(b))?;

    let mid_at = at + first + 1;
    let mid = digit_run(input, mid_at);
    if !(1..=2).contains(&mid) || peek(input, mid_at + mid) != Some(sep) {
        return None;
    }

    let last_at = mid_at + mid + 1;
    let last = digit_run(input, last_at);
    let end = last_at + last;

    let (year, month, day) = match (first, last) {
        (4, 1..=2) => (
            parse_digits(input, at, 4),
            parse_digits(input, mid_at, mid),
            parse_digits(input, last_at, last),
        ),
        (1..=2, 4) => (
            parse_digits(input, last_at, 4),
            parse_digits(input, mid_at, mid),
            parse_digits(input, at, first),
        ),
        _ => return None,
    };

    (clean_trailing_edge(input, end, SEPARATORS) && is_valid_date(year, month, day))
        .then_some(end - at)
}

/// Reports numeric and textual dates.
#[derive(Debug, Default)]
pub struct DobDetector {
    months: MonthScanner,
}

impl DobDetector {
    pub fn new() -> Self {
        Self {
            months: MonthScanner::new(),
        }
    }

    fn scan_numeric(&self, input: &[u8], acc: &mut MatchAccumulator) {
        let mut at = 0;
        while at < input.len() {
            let found = if is_digit(input[at]) { numeric_at(input, at) } else { None };
            match found {
                Some(len) => {
                    acc.push(Category::Dob, at, len);
                    at += len;
                }
                None => at += 1,
            }
        }
    }

    fn scan_textual(&self, input: &[u8], acc: &mut MatchAccumulator) {
        for token in self.months.find_months(input) {
            if let Some(len) = textual_at(input, token) {
                acc.push(Category::Dob, token.start, len);
            }
        }
    }
}

impl Detector for DobDetector {
    fn category(&self) -> Category {
        Category::Dob
    }

    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator) {
        self.scan_numeric(input, acc);
        self.scan_textual(input, acc);
    }
}
