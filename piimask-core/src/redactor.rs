// piimask-core/src/redactor.rs
//! The `RedactionEngine` implementation that composes the byte-level detectors.
//!
//! Each call gets its own `MatchAccumulator`, and every detector keeps its scan
//! state on the stack, so one `Redactor` can serve many threads at once.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use piimask_scan::detector::detector_for;
use piimask_scan::{apply_mask, default_detectors, Category, Detector, MatchAccumulator, DEFAULT_MASK};

use crate::config::{mask_to_byte, RedactorConfig};
use crate::engine::RedactionEngine;
use crate::errors::PiimaskError;
use crate::redaction_match::{log_redaction_match_debug, RedactionMatch};

#[derive(Debug)]
pub struct Redactor {
    detectors: Vec<Box<dyn Detector>>,
    mask: u8,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor {
    /// All five detectors, masking with `*`.
    pub fn new() -> Self {
        Self {
            detectors: default_detectors(),
            mask: DEFAULT_MASK,
        }
    }

    /// A redactor running exactly `detectors`, in the given order.
    pub fn with_detectors(detectors: Vec<Box<dyn Detector>>, mask: char) -> Result<Self, PiimaskError> {
        Ok(Self {
            detectors,
            mask: mask_to_byte(mask)?,
        })
    }

    /// Builds the detector set and mask described by `config`.
    pub fn from_config(config: &RedactorConfig) -> Result<Self> {
        let categories = config
            .active_categories()
            .context("Failed to resolve active detectors")?;
        let detectors = categories.into_iter().map(detector_for).collect();
        let redactor = Self::with_detectors(detectors, config.mask_char())
            .context("Failed to build redactor from config")?;

        debug!(
            "Redactor built with {} detectors, mask {:?}",
            redactor.detectors.len(),
            config.mask_char()
        );
        Ok(redactor)
    }

    fn collect(&self, input: &[u8]) -> MatchAccumulator {
        let mut acc = MatchAccumulator::new(input.len());
        for detector in &self.detectors {
            let before = acc.len();
            detector.scan(input, &mut acc);
            debug!(
                "Detector '{}' reported {} spans",
                detector.category(),
                acc.len() - before
            );
        }
        acc
    }
}

impl RedactionEngine for Redactor {
    fn redact(&self, input: &[u8]) -> Vec<u8> {
        if input.is_empty() {
            return Vec::new();
        }

        let acc = self.collect(input);
        if acc.is_empty() {
            return input.to_vec();
        }

        for finding in acc.findings() {
            let span = finding.span;
            log_redaction_match_debug(
                module_path!(),
                finding.category,
                span.start,
                &input[span.start..span.end()],
            );
        }

        let spans = acc.into_merged();
        apply_mask(input, &spans, self.mask)
    }

    fn find_matches(&self, input: &[u8], source_id: &str) -> Vec<RedactionMatch> {
        let acc = self.collect(input);
        let mut out: Vec<RedactionMatch> = acc
            .findings()
            .iter()
            .map(|f| RedactionMatch::from_finding(f, input, source_id))
            .collect();
        out.sort_by_key(|m| (m.start, m.end));
        out
    }

    fn categories(&self) -> Vec<Category> {
        self.detectors.iter().map(|d| d.category()).collect()
    }

    fn mask(&self) -> u8 {
        self.mask
    }
}
