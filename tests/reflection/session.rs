use aethero::reflection::{
    CapabilityLevel, QualityTrend, ReflectionConfig, ThresholdInsightPolicy,
};

use super::{REFERENCE_LINE, aggregator_with, deterministic_aggregator};

#[test]
fn given_repeated_reflections_when_session_grows_then_session_number_increments() {
    let mut aggregator = deterministic_aggregator();

    let first = aggregator.reflect(REFERENCE_LINE).expect("first reflection");
    let second = aggregator.reflect(REFERENCE_LINE).expect("second reflection");

    assert_eq!(first.session_number, 1);
    assert_eq!(second.session_number, 2);
    assert_eq!(second.agent_performance_summary.total_reflection_sessions, 2);
}

#[test]
fn given_identical_documents_when_quality_is_assessed_then_trend_moves_from_improving_to_stable() {
    let mut aggregator = deterministic_aggregator();

    let first = aggregator.reflect(REFERENCE_LINE).expect("first reflection");
    let second = aggregator.reflect(REFERENCE_LINE).expect("second reflection");

    assert_eq!(first.reflection_quality_metrics.quality_trend, QualityTrend::Improving);
    assert_eq!(second.reflection_quality_metrics.quality_trend, QualityTrend::Stable);
    assert_eq!(second.reflection_quality_metrics.reflection_consistency, 1.0);
}

#[test]
fn given_two_batches_when_analyzed_then_cognitive_trends_become_available() {
    let mut aggregator = deterministic_aggregator();

    let first = aggregator.reflect(REFERENCE_LINE).expect("first reflection");
    let second = aggregator.reflect(REFERENCE_LINE).expect("second reflection");

    let first_trends = serde_json::to_value(&first.cognitive_trends).expect("trends serialize");
    let second_trends = serde_json::to_value(&second.cognitive_trends).expect("trends serialize");
    assert!(first_trends.get("message").is_some());
    assert_eq!(second_trends["session_count"], 2);
}

#[test]
fn given_history_capacity_when_exceeded_then_export_keeps_most_recent_records() {
    let mut aggregator = aggregator_with(
        ReflectionConfig {
            history_capacity: 2,
            ..ReflectionConfig::default()
        },
        Box::new(ThresholdInsightPolicy::default()),
    );
    for _ in 0..3 {
        aggregator.reflect(REFERENCE_LINE).expect("reflection should succeed");
    }

    let export = aggregator.export_session();
    let sequences: Vec<u64> = export
        .reflection_history
        .iter()
        .map(|record| record.sequence)
        .collect();
    assert_eq!(sequences, vec![2, 3]);
    assert_eq!(export.session_number, 3);
    assert_eq!(export.consciousness_evolution_track.len(), 2);
    assert_eq!(export.metrics_analysis.analysis_history.len(), 3);
}

#[test]
fn given_empty_document_when_reflected_then_no_evolution_entry_is_recorded() {
    let mut aggregator = deterministic_aggregator();

    aggregator.reflect("").expect("empty reflection");
    let report = aggregator.reflect(REFERENCE_LINE).expect("tagged reflection");

    assert_eq!(
        report.agent_performance_summary.consciousness_evolution_track_length,
        1
    );
    assert_eq!(
        report.agent_performance_summary.introspective_capability_level,
        CapabilityLevel::Developing
    );
}

#[test]
fn given_session_export_when_serialized_then_records_carry_top_insights() {
    let mut aggregator = deterministic_aggregator();
    aggregator.reflect("").expect("empty reflection");

    let export = aggregator.export_session();
    let value = serde_json::to_value(&export).expect("export should serialize");

    assert_eq!(value["reflection_agent_id"], "reflection-agent-run-1");
    assert_eq!(
        value["reflection_history"][0]["key_insights"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
    assert_eq!(value["reflection_history"][0]["validated_tags_count"], 0);
}
