// piimask-core/src/engine.rs
//! Defines the core RedactionEngine trait.
//!
//! The trait decouples callers from how detection is composed, so a caller can
//! hold a `Box<dyn RedactionEngine>` and swap the implementation.
//!
//! License: MIT OR APACHE 2.0

use piimask_scan::Category;

use crate::redaction_match::{summarize, RedactionMatch, RedactionSummaryItem};

/// A length-preserving PII redaction pass.
///
/// Implementations are total: every input, including empty or malformed text,
/// produces an output of exactly the same length.
pub trait RedactionEngine: Send + Sync {
    /// Masks every detected byte; all other bytes are copied unchanged.
    fn redact(&self, input: &[u8]) -> Vec<u8>;

    /// [`RedactionEngine::redact`] over UTF-8 text.
    ///
    /// Detectors only report ASCII bytes and the mask is ASCII, so the output
    /// is valid UTF-8 whenever the input is.
    fn redact_str(&self, input: &str) -> String {
        let output = self.redact(input.as_bytes());
        String::from_utf8(output).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Every detector finding, sorted by start offset, without modifying the input.
    ///
    /// Findings from different detectors may overlap; they are not merged here.
    ///
    /// # Arguments
    /// * `input` - The buffer to scan.
    /// * `source_id` - An identifier for the source of the content (e.g., a file path).
    fn find_matches(&self, input: &[u8], source_id: &str) -> Vec<RedactionMatch>;

    /// Per-category counts, for stats-only reporting.
    fn analyze_for_stats(&self, input: &[u8]) -> Vec<RedactionSummaryItem> {
        summarize(&self.find_matches(input, ""))
    }

    /// Categories this engine detects, in run order.
    fn categories(&self) -> Vec<Category>;

    /// The byte written over matched positions.
    fn mask(&self) -> u8;
}
