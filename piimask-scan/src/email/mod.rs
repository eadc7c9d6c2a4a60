// piimask-scan/src/email/mod.rs
//! Email address detection.
//!
//! Only the local part (everything before `@`) is reported. The `@` and the
//! domain stay visible, even when the domain is incomplete.

use crate::context::{is_alnum, peek, peek_before};
use crate::detector::{Category, Detector};
use crate::span::MatchAccumulator;

#[inline]
fn is_local_part_byte(b: u8) -> bool {
    is_alnum(b) || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

/// Start offset of the local part ending at the `@` at `at`, if it is acceptable.
fn local_part_start(input: &[u8], at: usize) -> Option<usize> {
    let mut start = at;
    while start > 0 && is_local_part_byte(input[start - 1]) {
        start -= 1;
    }
    while start < at && input[start] == b'.' {
        start += 1;
    }
    if start == at || peek_before(input, start) == Some(b'@') {
        return None;
    }
    Some(start)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailDetector;

impl Detector for EmailDetector {
    fn category(&self) -> Category {
        Category::Email
    }

    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator) {
        for at in positions_of(b'@', input) {
            if !peek(input, at + 1).is_some_and(is_alnum) {
                continue;
            }
            if let Some(start) = local_part_start(input, at) {
                acc.push(Category::Email, start, at - start);
            }
        }
    }
}

fn positions_of(needle: u8, haystack: &[u8]) -> impl Iterator<Item = usize> + '_ {
    haystack
        .iter()
        .enumerate()
        .filter_map(move |(i, &b)| (b == needle).then_some(i))
}
