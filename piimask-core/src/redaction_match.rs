// piimask-core/src/redaction_match.rs
//! Reporting types for redaction events, and PII-safe debug logging.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use piimask_scan::{Category, Finding};

/// Initialised once: whether matched PII may appear verbatim in debug logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("PIIMASK_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single detected item. Holds offsets and a fingerprint, never the PII itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionMatch {
    /// Detector identifier, e.g. `credit_card`.
    pub category: String,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub sample_hash: Option<String>,
    #[serde(default)]
    pub source_id: String,
}

impl RedactionMatch {
    pub fn from_finding(finding: &Finding, input: &[u8], source_id: &str) -> Self {
        let span = finding.span;
        let matched = &input[span.start..span.end()];
        Self {
            category: finding.category.name().to_string(),
            start: span.start,
            end: span.end(),
            sample_hash: Some(canonical_sample_hash(finding.category, matched)),
            source_id: source_id.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Per-category occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummaryItem {
    pub category: String,
    pub occurrences: usize,
}

pub fn redact_sensitive(s: &[u8]) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} bytes]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &[u8]) -> String {
    if *PII_DEBUG_ALLOWED {
        String::from_utf8_lossy(sensitive_content).into_owned()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_redaction_match_debug(module_path: &str, category: Category, start: usize, matched: &[u8]) {
    debug!(
        "{} Found match: Category='{}', Offset={}, Original='{}'",
        module_path,
        category,
        start,
        get_loggable_content(matched)
    );
}

/// Hex SHA-256 of `category:matched`, stable across runs.
///
/// Separators inside the match are ignored, so `4111 1111 1111 1111` and
/// `4111-1111-1111-1111` share a fingerprint.
pub fn canonical_sample_hash(category: Category, matched: &[u8]) -> String {
    let normalized: Vec<u8> = matched
        .iter()
        .filter(|&&b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'@'))
        .map(u8::to_ascii_lowercase)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(category.name().as_bytes());
    hasher.update(b":");
    hasher.update(&normalized);
    hex::encode(hasher.finalize())
}

/// Counts findings per category, in canonical category order.
pub fn summarize(matches: &[RedactionMatch]) -> Vec<RedactionSummaryItem> {
    Category::ALL
        .iter()
        .filter_map(|category| {
            let occurrences = matches.iter().filter(|m| m.category == category.name()).count();
            (occurrences > 0).then(|| RedactionSummaryItem {
                category: category.name().to_string(),
                occurrences,
            })
        })
        .collect()
}
