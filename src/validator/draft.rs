use std::str::FromStr;

use crate::{
    extractor::{
        Candidate, CandidateValue,
        types::{
            KEY_CERTAINTY_LEVEL, KEY_COGNITIVE_LOAD, KEY_DIPLOMATIC_ENHANCEMENT, KEY_EMOTION_TONE,
            KEY_ENHANCEMENT_SUGGESTION, KEY_GOVERNING_RULE, KEY_MEMORY_LINK, KEY_MENTAL_STATE,
            KEY_TEMPORAL_CONTEXT, KEY_THOUGHT_STREAM,
        },
    },
    tag::{
        DEFAULT_GOVERNING_RULE, DEFAULT_MEMORY_LINK, DEFAULT_THOUGHT_STREAM, EmotionTone,
        MentalState, TagDraft, TagRule, TemporalContext, Violation,
    },
};

pub const DEFAULT_COGNITIVE_LOAD: i64 = 1;
pub const DEFAULT_CERTAINTY_LEVEL: f64 = 0.5;

/// Required fields in the order defaults are applied.
pub const REQUIRED_FIELDS: [&str; 8] = [
    KEY_THOUGHT_STREAM,
    KEY_MENTAL_STATE,
    KEY_EMOTION_TONE,
    KEY_COGNITIVE_LOAD,
    KEY_TEMPORAL_CONTEXT,
    KEY_CERTAINTY_LEVEL,
    KEY_MEMORY_LINK,
    KEY_GOVERNING_RULE,
];

const OPTIONAL_FIELDS: [&str; 2] = [KEY_ENHANCEMENT_SUGGESTION, KEY_DIPLOMATIC_ENHANCEMENT];

pub fn default_value(field: &str) -> Option<CandidateValue> {
    let value = match field {
        KEY_THOUGHT_STREAM => CandidateValue::from(DEFAULT_THOUGHT_STREAM),
        KEY_MENTAL_STATE => CandidateValue::from(MentalState::Reflective.as_str()),
        KEY_EMOTION_TONE => CandidateValue::from(EmotionTone::Neutral.as_str()),
        KEY_COGNITIVE_LOAD => CandidateValue::Integer(DEFAULT_COGNITIVE_LOAD),
        KEY_TEMPORAL_CONTEXT => CandidateValue::from(TemporalContext::Present.as_str()),
        KEY_CERTAINTY_LEVEL => CandidateValue::Float(DEFAULT_CERTAINTY_LEVEL),
        KEY_MEMORY_LINK => CandidateValue::from(DEFAULT_MEMORY_LINK),
        KEY_GOVERNING_RULE => CandidateValue::from(DEFAULT_GOVERNING_RULE),
        _ => return None,
    };
    Some(value)
}

/// Keeps the schema's fields from `candidate` and fills in every missing
/// required one. Returns the filled candidate and the names that defaulted.
pub fn with_defaults(candidate: &Candidate) -> (Candidate, Vec<&'static str>) {
    let mut effective: Candidate = candidate
        .iter()
        .filter(|(key, _)| {
            REQUIRED_FIELDS.contains(&key.as_str()) || OPTIONAL_FIELDS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut defaulted = Vec::new();
    for field in REQUIRED_FIELDS {
        if effective.contains_key(field) {
            continue;
        }
        if let Some(value) = default_value(field) {
            effective.insert(field.to_string(), value);
            defaulted.push(field);
        }
    }
    (effective, defaulted)
}

/// Converts a filled candidate into a draft, reporting every field whose value
/// has the wrong type.
pub fn to_draft(effective: &Candidate) -> Result<TagDraft, Vec<Violation>> {
    let mut violations = Vec::new();

    let thought_stream = text_field(effective, KEY_THOUGHT_STREAM);
    let memory_link = text_field(effective, KEY_MEMORY_LINK);
    let governing_rule = text_field(effective, KEY_GOVERNING_RULE);
    let mental_state = literal_field::<MentalState>(effective, KEY_MENTAL_STATE, &mut violations);
    let emotion_tone = literal_field::<EmotionTone>(effective, KEY_EMOTION_TONE, &mut violations);
    let temporal_context =
        literal_field::<TemporalContext>(effective, KEY_TEMPORAL_CONTEXT, &mut violations);
    let cognitive_load = load_field(effective, &mut violations);
    let certainty_level = certainty_field(effective, &mut violations);

    let (
        Some(mental_state),
        Some(emotion_tone),
        Some(temporal_context),
        Some(cognitive_load),
        Some(certainty_level),
    ) = (
        mental_state,
        emotion_tone,
        temporal_context,
        cognitive_load,
        certainty_level,
    )
    else {
        return Err(violations);
    };

    Ok(TagDraft {
        thought_stream,
        mental_state,
        emotion_tone,
        cognitive_load,
        temporal_context,
        certainty_level,
        memory_link,
        governing_rule,
        enhancement_suggestion: optional_text(effective, KEY_ENHANCEMENT_SUGGESTION),
        diplomatic_enhancement: optional_text(effective, KEY_DIPLOMATIC_ENHANCEMENT),
    })
}

fn text_field(effective: &Candidate, field: &str) -> String {
    effective
        .get(field)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn optional_text(effective: &Candidate, field: &str) -> Option<String> {
    effective.get(field).map(ToString::to_string)
}

fn type_violation(field: &str, message: String) -> Violation {
    Violation::new(TagRule::FieldType, &[field], message)
}

fn literal_field<T>(effective: &Candidate, field: &str, violations: &mut Vec<Violation>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match effective.get(field)? {
        CandidateValue::Text(raw) => match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                violations.push(type_violation(field, err.to_string()));
                None
            }
        },
        other => {
            violations.push(type_violation(
                field,
                format!("{field} expects a literal, got number {other}"),
            ));
            None
        }
    }
}

fn load_field(effective: &Candidate, violations: &mut Vec<Violation>) -> Option<i64> {
    let parsed = match effective.get(KEY_COGNITIVE_LOAD)? {
        CandidateValue::Integer(load) => Some(*load),
        CandidateValue::Float(load) => integral(*load),
        CandidateValue::Text(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(integral))
        }
    };
    if parsed.is_none() {
        violations.push(type_violation(
            KEY_COGNITIVE_LOAD,
            format!(
                "cognitive_load expects an integer, got '{}'",
                effective
                    .get(KEY_COGNITIVE_LOAD)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
        ));
    }
    parsed
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
        .then_some(value as i64)
}

fn certainty_field(effective: &Candidate, violations: &mut Vec<Violation>) -> Option<f64> {
    let parsed = match effective.get(KEY_CERTAINTY_LEVEL)? {
        CandidateValue::Float(certainty) => Some(*certainty),
        CandidateValue::Integer(certainty) => Some(*certainty as f64),
        CandidateValue::Text(raw) => raw.trim().parse::<f64>().ok(),
    };
    if parsed.is_none() {
        violations.push(type_violation(
            KEY_CERTAINTY_LEVEL,
            format!(
                "certainty_level expects a number, got '{}'",
                effective
                    .get(KEY_CERTAINTY_LEVEL)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
        ));
    }
    parsed
}
