// piimask-scan/src/span/mod.rs
//! Match spans, the per-pass accumulator, and the final rewrite.

extern crate alloc;
use alloc::vec::Vec;

use crate::detector::Category;

/// A contiguous byte range `[start, start + len)` reported as PII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the two spans share at least one byte.
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// True if the span fits inside a buffer of `buffer_len` bytes.
    pub const fn within(&self, buffer_len: usize) -> bool {
        self.start <= buffer_len && self.len <= buffer_len - self.start
    }
}

/// A span tagged with the category of the detector that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub category: Category,
    pub span: Span,
}

/// Collects the spans reported by every detector during one redaction pass.
///
/// Bound to the length of the buffer being scanned; spans that do not fit, and
/// empty spans, are dropped on entry so the rewrite never has to re-check them.
#[derive(Debug, Clone)]
pub struct MatchAccumulator {
    buffer_len: usize,
    found: Vec<Finding>,
}

impl MatchAccumulator {
    pub fn new(buffer_len: usize) -> Self {
        Self {
            buffer_len,
            found: Vec::new(),
        }
    }

    /// Records a span. Returns `false` if it was rejected as empty or out of bounds.
    pub fn push(&mut self, category: Category, start: usize, len: usize) -> bool {
        let span = Span::new(start, len);
        if span.is_empty() || !span.within(self.buffer_len) {
            return false;
        }
        self.found.push(Finding { category, span });
        true
    }

    pub fn findings(&self) -> &[Finding] {
        &self.found
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Consumes the accumulator, returning the raw findings in report order.
    pub fn into_findings(self) -> Vec<Finding> {
        self.found
    }

    /// Consumes the accumulator, returning sorted, disjoint spans covering every finding.
    pub fn into_merged(self) -> Vec<Span> {
        merge_spans(self.found.into_iter().map(|f| f.span).collect())
    }
}

/// Resolves spans into their union of coverage.
///
/// Overlapping or touching spans are folded together. The result is sorted by
/// start offset and pairwise disjoint.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.retain(|s| !s.is_empty());
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end() => {
                let end = last.end().max(span.end());
                last.len = end - last.start;
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Copies `input`, replacing every byte covered by `spans` with `mask`.
///
/// Spans reaching past the end of `input` are clipped. The output always has
/// the same length as the input.
pub fn apply_mask(input: &[u8], spans: &[Span], mask: u8) -> Vec<u8> {
    let mut output = input.to_vec();
    for span in spans {
        let start = span.start.min(output.len());
        let end = span.end().min(output.len());
        output[start..end].fill(mask);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_accumulator_rejects_empty_and_out_of_bounds() {
        let mut acc = MatchAccumulator::new(10);
        assert!(!acc.push(Category::Ssn, 3, 0));
        assert!(!acc.push(Category::Ssn, 8, 3));
        assert!(!acc.push(Category::Ssn, 11, 1));
        assert!(acc.push(Category::Ssn, 0, 10));
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_merge_union_of_coverage() {
        let merged = merge_spans(vec![
            Span::new(10, 5),
            Span::new(0, 4),
            Span::new(12, 8),
            Span::new(4, 2),
            Span::new(30, 1),
        ]);
        assert_eq!(merged, vec![Span::new(0, 6), Span::new(10, 10), Span::new(30, 1)]);
    }

    #[test]
    fn test_merge_contained_span() {
        let merged = merge_spans(vec![Span::new(0, 20), Span::new(5, 3)]);
        assert_eq!(merged, vec![Span::new(0, 20)]);
    }

    #[test]
    fn test_apply_mask_preserves_length_and_context() {
        let out = apply_mask(b"ab 1234 cd", &[Span::new(3, 4)], b'*');
        assert_eq!(out, b"ab **** cd".to_vec());
    }

    #[test]
    fn test_apply_mask_clips_overlong_span() {
        let out = apply_mask(b"abc", &[Span::new(1, 10)], b'#');
        assert_eq!(out, b"a##".to_vec());
    }

    #[test]
    fn test_overlaps() {
        assert!(Span::new(0, 5).overlaps(&Span::new(4, 2)));
        assert!(!Span::new(0, 5).overlaps(&Span::new(5, 2)));
    }
}
