// piimask-core/src/lib.rs
//! # piimask Core Library
//!
//! `piimask-core` turns the byte-level detectors of `piimask-scan` into a
//! configurable, length-preserving redaction engine. Every byte that belongs to a
//! detected credit card number, email address, phone number, SSN, or date of
//! birth is overwritten with a mask character; every other byte is copied as is.
//!
//! ## Modules
//!
//! * `config`: `RedactorConfig` and `DetectorRule`, loaded from YAML and merged over the defaults.
//! * `engine`: The `RedactionEngine` trait.
//! * `redactor`: `Redactor`, the concrete engine composing the detectors.
//! * `redaction_match`: Reporting types and PII-safe debug logging.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: `PiimaskError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use piimask_core::{RedactionEngine, Redactor};
//!
//! let redactor = Redactor::new();
//! let out = redactor.redact_str("ssn 123-12-1234, mail jane@example.com");
//! assert_eq!(out, "ssn ***********, mail ****@example.com");
//! ```
//!
//! ## Error Handling
//!
//! Redaction never fails. Building a redactor from configuration returns
//! `anyhow::Result`, with `PiimaskError` describing what was wrong.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod redactor;

/// Re-exports the configuration types and functions.
pub use config::{merge_config, DetectorRule, RedactorConfig, DEFAULT_MASK};

pub use errors::PiimaskError;

pub use engine::RedactionEngine;
pub use redactor::Redactor;

pub use redaction_match::{
    canonical_sample_hash, redact_sensitive, summarize, RedactionMatch, RedactionSummaryItem,
};

pub use headless::{headless_redact_bytes, headless_redact_string, headless_report_json};

/// Re-exports the detector layer for callers assembling their own detector sets.
pub use piimask_scan::{Category, Detector, Span};
