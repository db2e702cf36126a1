use serde::{Deserialize, Serialize};

use crate::tag::invariants::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagErrorKind {
    InvalidField,
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct TagError {
    pub kind: TagErrorKind,
    pub message: String,
    pub violations: Vec<Violation>,
}

impl TagError {
    pub fn new(kind: TagErrorKind, message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            kind,
            message: message.into(),
            violations,
        }
    }

    pub fn violated_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .violations
            .iter()
            .flat_map(|violation| violation.fields.iter().map(String::as_str))
            .collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }
}

/// Single-field failures win the kind: a tag with a bad range is reported as
/// an invalid field even when a cross-field rule also failed.
pub fn rejected(violations: Vec<Violation>) -> TagError {
    let kind = if violations.iter().all(|v| v.rule.is_cross_field()) {
        TagErrorKind::InvariantViolation
    } else {
        TagErrorKind::InvalidField
    };
    let message = violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    TagError::new(kind, message, violations)
}
