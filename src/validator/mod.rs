pub mod admission;
pub mod draft;
pub mod types;

pub use admission::TagValidator;
pub use draft::{DEFAULT_CERTAINTY_LEVEL, DEFAULT_COGNITIVE_LOAD, REQUIRED_FIELDS};
pub use types::{Rejection, RejectionRecord};

use crate::{extractor::Candidate, tag::CognitiveTag};

/// One-shot validation with the system clock and random ids.
pub fn validate(candidate: &Candidate) -> Result<CognitiveTag, Rejection> {
    TagValidator::default().validate(candidate)
}
