// piimask-scan/src/detector/mod.rs
//! The contract every PII detector satisfies.

extern crate alloc;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::credit_card::CreditCardDetector;
use crate::dob::DobDetector;
use crate::email::EmailDetector;
use crate::phone::PhoneDetector;
use crate::span::MatchAccumulator;
use crate::ssn::SsnDetector;

/// The PII category a detector is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    CreditCard,
    Email,
    Phone,
    Ssn,
    Dob,
}

impl Category {
    /// Every category, in the order detectors run.
    pub const ALL: [Category; 5] = [
        Category::CreditCard,
        Category::Email,
        Category::Phone,
        Category::Ssn,
        Category::Dob,
    ];

    /// Stable snake_case identifier, as used in configuration files.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::Dob => "dob",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-category scanner.
///
/// `scan` must not retain state between calls: anything the automaton tracks
/// lives in a value created for that call. This keeps one detector instance
/// usable from many threads at once.
pub trait Detector: Send + Sync + fmt::Debug {
    fn category(&self) -> Category;

    /// Reports every match in `input` to `acc`.
    fn scan(&self, input: &[u8], acc: &mut MatchAccumulator);
}

/// Builds the detector for one category.
pub fn detector_for(category: Category) -> Box<dyn Detector> {
    match category {
        Category::CreditCard => Box::new(CreditCardDetector),
        Category::Email => Box::new(EmailDetector),
        Category::Phone => Box::new(PhoneDetector),
        Category::Ssn => Box::new(SsnDetector),
        Category::Dob => Box::new(DobDetector::new()),
    }
}

/// One detector per category, in [`Category::ALL`] order.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    let mut detectors = vec![];
    for category in Category::ALL {
        detectors.push(detector_for(category));
    }
    detectors
}
