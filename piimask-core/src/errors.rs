//! errors.rs - Custom error types for the piimask-core library.
//!
//! Redaction itself never fails; these errors come from building a redactor:
//! loading and validating configuration.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by `piimask-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PiimaskError {
    #[error("Mask character {0:?} is not a printable ASCII character")]
    InvalidMask(char),

    #[error("Unknown detector '{0}'")]
    UnknownDetector(String),

    #[error("Detector configuration failed validation:\n{0}")]
    ConfigValidation(String),
}
