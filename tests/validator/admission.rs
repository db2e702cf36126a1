use aethero::{
    extractor::{CandidateValue, extract},
    tag::{MentalState, TagRule},
};

use super::{candidate, deterministic_validator};

const REFERENCE_LINE: &str = "[ASL] thought_stream: test mental_state: focused emotion_tone: analytical cognitive_load: 6 temporal_context: present certainty_level: 0.8 aeth_mem_link: m1 constitutional_law: l1";

#[test]
fn given_reference_line_when_validated_then_tag_carries_the_line_values() {
    let mut validator = deterministic_validator();
    let tag = validator
        .validate(&extract(REFERENCE_LINE))
        .expect("reference line should be accepted");

    assert_eq!(tag.entity_id(), "tag-1");
    assert_eq!(tag.thought_stream(), "test");
    assert_eq!(tag.mental_state(), MentalState::Focused);
    assert_eq!(tag.cognitive_load(), 6);
    assert_eq!(tag.certainty_level(), 0.8);
    assert_eq!(tag.memory_link(), "m1");
    assert_eq!(tag.governing_rule(), "l1");
    assert_eq!(validator.accepted().len(), 1);
}

#[test]
fn given_calm_overload_when_validated_then_rejection_names_fields_and_values() {
    let mut validator = deterministic_validator();
    let rejection = validator
        .validate(&candidate(&[
            ("mental_state", "calm".into()),
            ("cognitive_load", CandidateValue::Integer(8)),
            ("thought_stream", "spin".into()),
        ]))
        .expect_err("calm with load 8 must be rejected");

    assert_eq!(rejection.rules(), vec![TagRule::CalmLoadCeiling]);
    assert_eq!(
        rejection.attempted.get("cognitive_load"),
        Some(&CandidateValue::Integer(8))
    );
    assert_eq!(
        rejection.attempted.get("mental_state"),
        Some(&CandidateValue::from("calm"))
    );
    assert!(!rejection.candidate.contains_key("memory_link"));
    assert_eq!(validator.rejected().len(), 1);
    assert!(validator.accepted().is_empty());
}

#[test]
fn given_unknown_literal_built_by_hand_when_validated_then_field_type_is_rejected() {
    let mut validator = deterministic_validator();
    let rejection = validator
        .validate(&candidate(&[("mental_state", "giddy".into())]))
        .expect_err("unknown literal must be rejected");

    assert_eq!(rejection.rules(), vec![TagRule::FieldType]);
    assert_eq!(rejection.violations[0].fields, vec!["mental_state".to_string()]);
}

#[test]
fn given_non_numeric_load_and_certainty_when_validated_then_both_type_errors_are_reported() {
    let mut validator = deterministic_validator();
    let rejection = validator
        .validate(&candidate(&[
            ("cognitive_load", "heavy".into()),
            ("certainty_level", "sure".into()),
        ]))
        .expect_err("non-numeric values must be rejected");

    assert_eq!(rejection.rules(), vec![TagRule::FieldType, TagRule::FieldType]);
    assert!(rejection.to_string().contains("cognitive_load"));
}

#[test]
fn given_rejection_when_recorded_then_record_serializes_flat_with_timestamp() {
    let mut validator = deterministic_validator();
    validator
        .validate(&candidate(&[("cognitive_load", CandidateValue::Integer(0))]))
        .expect_err("load 0 must be rejected");

    let value = serde_json::to_value(&validator.rejected()[0]).expect("record should serialize");
    assert_eq!(value["rejected_at"], "1970-01-01T00:00:00Z");
    assert_eq!(value["violations"][0]["rule"], "load_range");
    assert_eq!(value["attempted"]["cognitive_load"], 0);
}

#[test]
fn given_mixed_candidates_when_validated_then_accumulators_keep_order() {
    let mut validator = deterministic_validator();
    validator
        .validate(&candidate(&[("thought_stream", "first".into())]))
        .expect("first should be accepted");
    validator
        .validate(&candidate(&[("certainty_level", CandidateValue::Float(1.5))]))
        .expect_err("certainty above 1 must be rejected");
    validator
        .validate(&candidate(&[("thought_stream", "second".into())]))
        .expect("second should be accepted");

    let ids: Vec<&str> = validator.accepted().iter().map(|tag| tag.entity_id()).collect();
    assert_eq!(ids, vec!["tag-1", "tag-2"]);
    assert_eq!(validator.rejected().len(), 1);
}
