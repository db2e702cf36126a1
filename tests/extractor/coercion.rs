use aethero::extractor::{CandidateValue, TagExtractor, extract};

#[test]
fn given_unknown_mental_state_when_extracted_then_reflective_is_substituted() {
    let candidate = extract("[ASL] mental_state: giddy");

    assert_eq!(candidate["mental_state"], CandidateValue::from("reflective"));
}

#[test]
fn given_unknown_tone_and_context_when_extracted_then_defaults_are_substituted() {
    let candidate = extract("[ASL] emotion_tone: wistful temporal_context: someday");

    assert_eq!(candidate["emotion_tone"], CandidateValue::from("neutral"));
    assert_eq!(candidate["temporal_context"], CandidateValue::from("present"));
}

#[test]
fn given_mixed_case_literal_when_extracted_then_value_is_normalized() {
    let candidate = extract("[ASL] mental_state: FoCuSeD temporal_context: Future");

    assert_eq!(candidate["mental_state"], CandidateValue::from("focused"));
    assert_eq!(candidate["temporal_context"], CandidateValue::from("future"));
}

#[test]
fn given_bad_load_when_extracted_then_fallback_and_certainty_penalty_apply() {
    let mut extractor = TagExtractor::default();
    let candidate = extractor.extract("[ASL] cognitive_load: heavy");

    assert_eq!(candidate["cognitive_load"], CandidateValue::Integer(1));
    assert!((extractor.parse_certainty() - 0.9).abs() < 1e-12);
}

#[test]
fn given_bad_certainty_when_extracted_then_fallback_and_certainty_penalty_apply() {
    let mut extractor = TagExtractor::default();
    let candidate = extractor.extract("[ASL] certainty_level: sure");

    assert_eq!(candidate["certainty_level"], CandidateValue::Float(0.5));
    assert!((extractor.parse_certainty() - 0.8).abs() < 1e-12);
}

#[test]
fn given_repeated_failures_when_extracted_then_penalties_compound() {
    let mut extractor = TagExtractor::default();
    extractor.extract("[ASL] cognitive_load: heavy certainty_level: sure");
    extractor.extract("[ASL] cognitive_load: x");

    assert!((extractor.parse_certainty() - 0.9 * 0.8 * 0.9).abs() < 1e-12);
}

#[test]
fn given_out_of_range_certainty_when_extracted_then_value_is_clamped() {
    assert_eq!(
        extract("[ASL] certainty_level: 1.7")["certainty_level"],
        CandidateValue::Float(1.0)
    );
    assert_eq!(
        extract("[ASL] certainty_level: -3")["certainty_level"],
        CandidateValue::Float(0.0)
    );
}

#[test]
fn given_unknown_key_when_extracted_then_text_is_kept_verbatim() {
    let candidate = extract("[ASL] mood_ring: 42");

    assert_eq!(candidate["mood_ring"], CandidateValue::from("42"));
}
