use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A value pulled from an annotation line, typed by its canonical key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CandidateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CandidateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CandidateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CandidateValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CandidateValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Canonical key → value. Keys the tag schema does not know are kept verbatim.
pub type Candidate = BTreeMap<String, CandidateValue>;

pub const KEY_THOUGHT_STREAM: &str = "thought_stream";
pub const KEY_MENTAL_STATE: &str = "mental_state";
pub const KEY_EMOTION_TONE: &str = "emotion_tone";
pub const KEY_COGNITIVE_LOAD: &str = "cognitive_load";
pub const KEY_TEMPORAL_CONTEXT: &str = "temporal_context";
pub const KEY_CERTAINTY_LEVEL: &str = "certainty_level";
pub const KEY_MEMORY_LINK: &str = "memory_link";
pub const KEY_GOVERNING_RULE: &str = "governing_rule";
pub const KEY_ENHANCEMENT_SUGGESTION: &str = "enhancement_suggestion";
pub const KEY_DIPLOMATIC_ENHANCEMENT: &str = "diplomatic_enhancement";

const KEY_ALIASES: [(&str, &str); 4] = [
    ("statement", KEY_THOUGHT_STREAM),
    ("law", KEY_GOVERNING_RULE),
    ("constitutional_law", KEY_GOVERNING_RULE),
    ("aeth_mem_link", KEY_MEMORY_LINK),
];

pub fn alias_target(key: &str) -> Option<&'static str> {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Renders `candidate` back into a single annotation line under `label`.
pub fn render_line(label: &str, candidate: &Candidate) -> String {
    let pairs = candidate
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{label}] {pairs}")
}
