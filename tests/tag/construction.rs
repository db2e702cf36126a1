use aethero::tag::{CognitiveTag, MentalState, TagErrorKind, TagRule};

use super::{draft, sources};

#[test]
fn given_calm_state_when_load_is_eight_then_construction_fails() {
    let (clock, ids) = sources();
    let err = CognitiveTag::new(draft(MentalState::Calm, 8, 0.5), &clock, &ids)
        .expect_err("calm with load 8 must be rejected");

    assert_eq!(err.kind, TagErrorKind::InvariantViolation);
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].rule, TagRule::CalmLoadCeiling);
    assert_eq!(err.violated_fields(), vec!["cognitive_load", "mental_state"]);
}

#[test]
fn given_calm_state_when_load_is_seven_then_construction_succeeds() {
    let (clock, ids) = sources();
    let tag = CognitiveTag::new(draft(MentalState::Calm, 7, 0.5), &clock, &ids)
        .expect("calm with load 7 should be accepted");

    assert_eq!(tag.cognitive_load(), 7);
    assert_eq!(tag.entity_id(), "tag-1");
}

#[test]
fn given_uncertain_state_when_certainty_exceeds_ceiling_then_construction_fails() {
    let (clock, ids) = sources();
    let err = CognitiveTag::new(draft(MentalState::Uncertain, 4, 0.61), &clock, &ids)
        .expect_err("uncertain with 0.61 must be rejected");

    assert_eq!(err.violations[0].rule, TagRule::UncertainCertaintyCeiling);
}

#[test]
fn given_uncertain_state_when_certainty_is_at_ceiling_then_construction_succeeds() {
    let (clock, ids) = sources();
    let tag = CognitiveTag::new(draft(MentalState::Uncertain, 4, 0.60), &clock, &ids)
        .expect("uncertain with 0.60 should be accepted");

    assert_eq!(tag.certainty_level(), 0.60);
}

#[test]
fn given_confused_state_when_load_is_below_floor_then_construction_fails() {
    let (clock, ids) = sources();
    let err = CognitiveTag::new(draft(MentalState::Confused, 2, 0.5), &clock, &ids)
        .expect_err("confused with load 2 must be rejected");

    assert_eq!(err.violations[0].rule, TagRule::ConfusedLoadFloor);
}

#[test]
fn given_decisive_state_when_certainty_is_low_then_construction_fails() {
    let (clock, ids) = sources();
    let err = CognitiveTag::new(draft(MentalState::Decisive, 4, 0.69), &clock, &ids)
        .expect_err("decisive with 0.69 must be rejected");

    assert_eq!(err.violations[0].rule, TagRule::DecisiveCertaintyFloor);
}

#[test]
fn given_several_broken_fields_when_constructing_then_every_violation_is_reported() {
    let (clock, ids) = sources();
    let mut broken = draft(MentalState::Calm, 11, 1.5);
    broken.thought_stream = "   ".to_string();

    let err = CognitiveTag::new(broken, &clock, &ids).expect_err("broken draft must fail");
    let rules: Vec<TagRule> = err.violations.iter().map(|v| v.rule).collect();

    assert_eq!(err.kind, TagErrorKind::InvalidField);
    assert_eq!(
        rules,
        vec![
            TagRule::LoadRange,
            TagRule::CertaintyRange,
            TagRule::ThoughtStreamPresent,
            TagRule::CalmLoadCeiling,
        ]
    );
}

#[test]
fn given_rejected_draft_when_constructing_then_no_id_is_consumed() {
    let (clock, ids) = sources();
    CognitiveTag::new(draft(MentalState::Calm, 9, 0.5), &clock, &ids)
        .expect_err("calm with load 9 must be rejected");
    let tag = CognitiveTag::new(draft(MentalState::Focused, 5, 0.5), &clock, &ids)
        .expect("focused draft should be accepted");

    assert_eq!(tag.entity_id(), "tag-1");
}
