use std::str::FromStr;

use crate::{
    extractor::types::{
        CandidateValue, KEY_CERTAINTY_LEVEL, KEY_COGNITIVE_LOAD, KEY_EMOTION_TONE,
        KEY_MENTAL_STATE, KEY_TEMPORAL_CONTEXT,
    },
    tag::{EmotionTone, MentalState, TemporalContext},
};

pub const LOAD_FAILURE_PENALTY: f64 = 0.9;
pub const CERTAINTY_FAILURE_PENALTY: f64 = 0.8;
pub const UNKNOWN_LITERAL_CONFIDENCE: f64 = 0.7;
pub const FALLBACK_COGNITIVE_LOAD: i64 = 1;
pub const FALLBACK_CERTAINTY_LEVEL: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum CoercionOutcome {
    Clean,
    /// Numeric parse failed; the fallback was used and parse certainty drops
    /// by `penalty`.
    Failed {
        key: &'static str,
        penalty: f64,
    },
    UnknownLiteral {
        key: &'static str,
        fallback: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    pub value: CandidateValue,
    pub outcome: CoercionOutcome,
}

impl Coercion {
    fn clean(value: CandidateValue) -> Self {
        Self {
            value,
            outcome: CoercionOutcome::Clean,
        }
    }
}

/// Types `raw` according to the canonical `key`. Keys without a typed slot
/// stay text.
pub fn coerce(key: &str, raw: &str) -> Coercion {
    match key {
        KEY_COGNITIVE_LOAD => coerce_load(raw),
        KEY_CERTAINTY_LEVEL => coerce_certainty(raw),
        KEY_MENTAL_STATE => {
            coerce_literal::<MentalState>(KEY_MENTAL_STATE, raw, MentalState::Reflective.as_str())
        }
        KEY_EMOTION_TONE => {
            coerce_literal::<EmotionTone>(KEY_EMOTION_TONE, raw, EmotionTone::Neutral.as_str())
        }
        KEY_TEMPORAL_CONTEXT => coerce_literal::<TemporalContext>(
            KEY_TEMPORAL_CONTEXT,
            raw,
            TemporalContext::Present.as_str(),
        ),
        _ => Coercion::clean(CandidateValue::Text(raw.to_string())),
    }
}

fn coerce_load(raw: &str) -> Coercion {
    match raw.parse::<i64>() {
        Ok(load) => Coercion::clean(CandidateValue::Integer(load)),
        Err(_) => Coercion {
            value: CandidateValue::Integer(FALLBACK_COGNITIVE_LOAD),
            outcome: CoercionOutcome::Failed {
                key: KEY_COGNITIVE_LOAD,
                penalty: LOAD_FAILURE_PENALTY,
            },
        },
    }
}

fn coerce_certainty(raw: &str) -> Coercion {
    match raw.parse::<f64>() {
        Ok(certainty) if certainty.is_finite() => {
            Coercion::clean(CandidateValue::Float(certainty.clamp(0.0, 1.0)))
        }
        _ => Coercion {
            value: CandidateValue::Float(FALLBACK_CERTAINTY_LEVEL),
            outcome: CoercionOutcome::Failed {
                key: KEY_CERTAINTY_LEVEL,
                penalty: CERTAINTY_FAILURE_PENALTY,
            },
        },
    }
}

fn coerce_literal<T>(key: &'static str, raw: &str, fallback: &'static str) -> Coercion
where
    T: FromStr + std::fmt::Display,
{
    match raw.parse::<T>() {
        Ok(literal) => Coercion::clean(CandidateValue::Text(literal.to_string())),
        Err(_) => Coercion {
            value: CandidateValue::Text(fallback.to_string()),
            outcome: CoercionOutcome::UnknownLiteral { key, fallback },
        },
    }
}
