// piimask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive redaction.
//!
//! Each call builds a `Redactor` from the given configuration and runs a single
//! pass. Callers redacting many inputs should build a `Redactor` once instead.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::RedactorConfig;
use crate::engine::RedactionEngine;
use crate::redaction_match::{summarize, RedactionMatch, RedactionSummaryItem};
use crate::redactor::Redactor;

/// Redacts `content` with the detectors and mask described by `config`.
pub fn headless_redact_string(config: &RedactorConfig, content: &str) -> Result<String> {
    let redactor = Redactor::from_config(config)?;
    Ok(redactor.redact_str(content))
}

/// Byte-buffer variant of [`headless_redact_string`]. The input need not be UTF-8.
pub fn headless_redact_bytes(config: &RedactorConfig, content: &[u8]) -> Result<Vec<u8>> {
    let redactor = Redactor::from_config(config)?;
    Ok(redactor.redact(content))
}

#[derive(Debug, Serialize)]
struct HeadlessReport<'a> {
    source_id: &'a str,
    input_len: usize,
    matches: Vec<RedactionMatch>,
    summary: Vec<RedactionSummaryItem>,
}

/// Scans `content` without modifying it and renders the findings as pretty JSON.
///
/// The report carries offsets and fingerprints only, never the matched text.
pub fn headless_report_json(config: &RedactorConfig, content: &[u8], source_id: &str) -> Result<String> {
    let redactor = Redactor::from_config(config)?;
    let matches = redactor.find_matches(content, source_id);
    let report = HeadlessReport {
        source_id,
        input_len: content.len(),
        summary: summarize(&matches),
        matches,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize redaction report")
}
