// piimask-scan/src/lib.rs
//! Single-pass PII detection automata.
//!
//! Every detector walks a byte buffer once, without backtracking and without a
//! regex engine, and reports the spans it is confident about into a
//! [`span::MatchAccumulator`]. Detection is defined over ASCII; any other byte is
//! simply a non-participating character.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod credit_card;
pub mod detector;
pub mod dob;
pub mod email;
pub mod phone;
pub mod span;
pub mod ssn;
pub mod validate;

pub use detector::{default_detectors, Category, Detector};
pub use span::{apply_mask, merge_spans, Finding, MatchAccumulator, Span};

/// Byte written over every masked position unless configured otherwise.
pub const DEFAULT_MASK: u8 = b'*';
