use std::collections::BTreeMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    extractor::{Candidate, CandidateValue},
    tag::{TagError, TagRule, Violation},
};

/// A candidate that did not become a tag. Carries every failed rule and the
/// values that were tried for the fields those rules name.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("candidate rejected: {}", summary(.violations))]
pub struct Rejection {
    pub violations: Vec<Violation>,
    pub attempted: BTreeMap<String, CandidateValue>,
    pub candidate: Candidate,
}

impl Rejection {
    pub(crate) fn new(violations: Vec<Violation>, effective: &Candidate, candidate: &Candidate) -> Self {
        let attempted = violations
            .iter()
            .flat_map(|violation| violation.fields.iter())
            .filter_map(|field| {
                effective
                    .get(field)
                    .map(|value| (field.clone(), value.clone()))
            })
            .collect();
        Self {
            violations,
            attempted,
            candidate: candidate.clone(),
        }
    }

    pub(crate) fn from_tag_error(error: TagError, effective: &Candidate, candidate: &Candidate) -> Self {
        Self::new(error.violations, effective, candidate)
    }

    pub fn rules(&self) -> Vec<TagRule> {
        self.violations.iter().map(|violation| violation.rule).collect()
    }
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionRecord {
    #[serde(flatten)]
    pub rejection: Rejection,
    #[serde(with = "time::serde::rfc3339")]
    pub rejected_at: OffsetDateTime,
}
