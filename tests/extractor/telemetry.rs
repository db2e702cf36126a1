use std::sync::Arc;

use aethero::extractor::{ExtractorTelemetryEvent, RecordingExtractorTelemetry, TagExtractor};

#[test]
fn given_recording_sink_when_line_has_no_marker_then_no_marker_event_is_emitted() {
    let telemetry = Arc::new(RecordingExtractorTelemetry::default());
    let mut extractor = TagExtractor::new(telemetry.clone());

    extractor.extract("just prose");

    assert_eq!(
        telemetry.events(),
        vec![ExtractorTelemetryEvent::NoMarker { line_number: 1 }]
    );
}

#[test]
fn given_recording_sink_when_alias_is_used_then_alias_event_names_canonical_key() {
    let telemetry = Arc::new(RecordingExtractorTelemetry::default());
    let mut extractor = TagExtractor::new(telemetry.clone());

    extractor.extract("[ASL] statement: hello");

    let events = telemetry.events();
    assert!(events.contains(&ExtractorTelemetryEvent::AliasApplied {
        line_number: 1,
        alias: "statement".to_string(),
        canonical: "thought_stream",
    }));
}

#[test]
fn given_recording_sink_when_literal_is_unknown_then_low_confidence_note_is_emitted() {
    let telemetry = Arc::new(RecordingExtractorTelemetry::default());
    let mut extractor = TagExtractor::new(telemetry.clone());

    extractor.extract("[ASL] mental_state: giddy");

    let note = telemetry
        .events()
        .into_iter()
        .find_map(|event| match event {
            ExtractorTelemetryEvent::UnknownLiteral {
                literal,
                fallback,
                confidence,
                ..
            } => Some((literal, fallback, confidence)),
            _ => None,
        })
        .expect("unknown literal event should be recorded");
    assert_eq!(note, ("giddy".to_string(), "reflective", 0.7));
}

#[test]
fn given_recording_sink_when_load_fails_then_event_carries_degraded_certainty() {
    let telemetry = Arc::new(RecordingExtractorTelemetry::default());
    let mut extractor = TagExtractor::new(telemetry.clone());

    extractor.extract("[ASL] cognitive_load: heavy");

    let degraded = telemetry.events().into_iter().any(|event| {
        matches!(
            event,
            ExtractorTelemetryEvent::CoercionFailed { key: "cognitive_load", parse_certainty, .. }
                if (parse_certainty - 0.9).abs() < 1e-12
        )
    });
    assert!(degraded, "coercion failure should be recorded");
}
