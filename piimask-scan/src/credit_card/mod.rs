// piimask-scan/src/credit_card/mod.rs
//! Payment card number detection.
//!
//! The buffer is walked right to left. Walking backwards puts the check digit
//! at position zero, so the Luhn doubling rule and the issuer-prefix rule can
//! both be evaluated from running counters after every digit, without ever
//! re-reading consumed bytes.
//!
//! A candidate is a run of digits grouped by a single break character (space or
//! hyphen). It is confirmed as soon as it holds 13 to 19 digits in 3 to 6
//! groups, its leading digit is a major network prefix (`3`-`6`) and the Luhn
//! sum is divisible by 10.

use crate::context::{is_alpha, is_digit, peek};
use crate::detector::{Category, Detector};
use crate::span::{MatchAccumulator, Span};
use crate::validate::luhn_digit;

pub const MIN_DIGITS: usize = 13;
pub const MAX_DIGITS: usize = 19;
pub const MIN_BREAKS: usize = 2;
pub const MAX_BREAKS: usize = 5;

/// Outcome of feeding one byte to the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The byte extends the current candidate.
    Accept,
    /// The byte completed a valid card number; state has been cleared.
    Confirmed(Span),
    /// The byte disqualified the candidate; state has been cleared.
    AbandonAndReset,
    /// A digit that may not open a candidate because a letter follows it.
    RejectStart,
}

/// Transient state of one backward scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    break_char: Option<u8>,
    break_count: usize,
    digit_count: usize,
    len: usize,
    sum: u32,
}

#[inline]
pub fn is_break(b: u8) -> bool {
    b == b' ' || b == b'-'
}

#[inline]
fn is_network_prefix(b: u8) -> bool {
    (b'3'..=b'6').contains(&b)
}

impl CardState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    pub fn break_count(&self) -> usize {
        self.break_count
    }

    /// Feeds `input[at]`; the scan moves from high to low indices.
    pub fn step(&mut self, input: &[u8], at: usize) -> Step {
        let b = input[at];
        if is_digit(b) {
            self.step_digit(input, at, b)
        } else if self.accepts_break(b) {
            self.break_char = Some(b);
            self.break_count += 1;
            self.len += 1;
            Step::Accept
        } else {
            self.reset();
            Step::AbandonAndReset
        }
    }

    fn step_digit(&mut self, input: &[u8], at: usize, b: u8) -> Step {
        // Looks at the already-consumed byte to the right: digits glued to a
        // trailing letter belong to an alphanumeric token, not a card number.
        if self.digit_count == 0 && peek(input, at + 1).is_some_and(is_alpha) {
            return Step::RejectStart;
        }

        self.sum += luhn_digit(u32::from(b - b'0'), self.digit_count);
        self.len += 1;
        self.digit_count += 1;

        if self.digit_count > MAX_DIGITS {
            self.reset();
            return Step::AbandonAndReset;
        }

        if !self.is_valid_card(b) {
            return Step::Accept;
        }

        let span = Span::new(at, self.len);
        self.reset();
        Step::Confirmed(span)
    }

    fn accepts_break(&self, b: u8) -> bool {
        if self.digit_count == 0 || !is_break(b) {
            return false;
        }
        self.break_char.map_or(true, |fixed| fixed == b)
    }

    /// `leading` is the digit just consumed, i.e. the first digit of the number.
    fn is_valid_card(&self, leading: u8) -> bool {
        (MIN_DIGITS..=MAX_DIGITS).contains(&self.digit_count)
            && (MIN_BREAKS..=MAX_BREAKS).contains(&self.break_count)
            && is_network_prefix(leading)
            && self.sum % 10 == 0
    }
}

/// Reports grouped, Luhn-valid card numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardDetector;

impl Detector for CreditCardDetector {
    fn category(&self) -> Category {
        Category::CreditCard
    }

    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator) {
        let mut state = CardState::default();
        for at in (0..input.len()).rev() {
            if let Step::Confirmed(span) = state.step(input, at) {
                acc.push(Category::CreditCard, span.start, span.len);
            }
        }
    }
}
