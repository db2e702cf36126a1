use std::sync::Arc;

use crate::{
    extractor::Candidate,
    tag::{Clock, CognitiveTag, IdSource, SystemClock, UuidIdSource},
    validator::{
        draft::{to_draft, with_defaults},
        types::{Rejection, RejectionRecord},
    },
};

/// Turns candidates into tags. Keeps every accepted tag and every rejection
/// it has produced, in order.
pub struct TagValidator {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    accepted: Vec<CognitiveTag>,
    rejected: Vec<RejectionRecord>,
}

impl Default for TagValidator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidIdSource))
    }
}

impl TagValidator {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            clock,
            ids,
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn accepted(&self) -> &[CognitiveTag] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[RejectionRecord] {
        &self.rejected
    }

    pub fn validate(&mut self, candidate: &Candidate) -> Result<CognitiveTag, Rejection> {
        let (effective, defaulted) = with_defaults(candidate);
        for field in defaulted.iter().copied() {
            tracing::debug!(
                target: "validator",
                field = field,
                "default_applied"
            );
        }

        let outcome = to_draft(&effective)
            .map_err(|violations| Rejection::new(violations, &effective, candidate))
            .and_then(|draft| {
                CognitiveTag::new(draft, self.clock.as_ref(), self.ids.as_ref())
                    .map_err(|err| Rejection::from_tag_error(err, &effective, candidate))
            });

        match outcome {
            Ok(tag) => {
                tracing::debug!(
                    target: "validator",
                    entity_id = tag.entity_id(),
                    defaulted = defaulted.len(),
                    "tag_accepted"
                );
                self.accepted.push(tag.clone());
                Ok(tag)
            }
            Err(rejection) => {
                tracing::info!(
                    target: "validator",
                    rules = ?rejection.rules(),
                    reason = %rejection,
                    "candidate_rejected"
                );
                self.rejected.push(RejectionRecord {
                    rejection: rejection.clone(),
                    rejected_at: self.clock.now(),
                });
                Err(rejection)
            }
        }
    }
}
