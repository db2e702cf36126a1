use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionErrorKind {
    InvalidState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ReflectionError {
    pub kind: ReflectionErrorKind,
    pub message: String,
}

impl ReflectionError {
    pub fn new(kind: ReflectionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn invalid_state(message: impl Into<String>) -> ReflectionError {
    ReflectionError::new(ReflectionErrorKind::InvalidState, message)
}
