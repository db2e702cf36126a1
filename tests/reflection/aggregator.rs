use std::panic::{AssertUnwindSafe, catch_unwind};

use aethero::{
    reflection::{
        InsightContext, InsightPolicy, ReflectionConfig, ReflectionErrorKind, ReflectionPhase,
        reflect,
    },
    tag::{EmotionTone, MentalState, TemporalContext},
};

use super::{REFERENCE_LINE, aggregator_with, deterministic_aggregator};

#[test]
fn given_reference_line_when_reflected_then_one_tag_and_no_rejections_are_reported() {
    let mut aggregator = deterministic_aggregator();
    let report = aggregator
        .reflect(REFERENCE_LINE)
        .expect("reflection should succeed");

    assert_eq!(report.reflection_agent_id, "reflection-agent-run-1");
    assert_eq!(report.session_number, 1);
    assert_eq!(report.validated_cognitive_tags.len(), 1);
    assert!(report.parsing_analysis.rejected.is_empty());

    let tag = &report.validated_cognitive_tags[0];
    assert_eq!(tag.entity_id(), "run-2");
    assert_eq!(tag.thought_stream(), "test");
    assert_eq!(tag.mental_state(), MentalState::Focused);
    assert_eq!(tag.emotion_tone(), EmotionTone::Analytical);
    assert_eq!(tag.cognitive_load(), 6);
    assert_eq!(tag.temporal_context(), TemporalContext::Present);
    assert_eq!(tag.certainty_level(), 0.8);
    assert_eq!(tag.memory_link(), "m1");
    assert_eq!(tag.governing_rule(), "l1");
    assert_eq!(report.parsing_analysis.validated_count, 1);
    assert_eq!(report.parsing_analysis.failed_count, 0);
    assert_eq!(report.introspective_metrics.tag_count, 1);
}

#[test]
fn given_two_fresh_aggregators_when_reflecting_same_document_then_reports_match() {
    let document = format!(
        "notes before\n{REFERENCE_LINE}\n# [ASL] thought_stream: doubt mental_state: uncertain certainty_level: 0.4 cognitive_load: 6\n"
    );

    let first = deterministic_aggregator()
        .reflect(&document)
        .expect("first reflection should succeed");
    let second = deterministic_aggregator()
        .reflect(&document)
        .expect("second reflection should succeed");

    assert_eq!(first.introspective_metrics, second.introspective_metrics);
    assert_eq!(first.actionable_insights, second.actionable_insights);
    assert_eq!(first, second);
}

#[test]
fn given_document_with_prose_and_rejected_lines_when_reflected_then_parsing_analysis_counts_them() {
    let document = format!("intro\n{REFERENCE_LINE}\n[ASL] mental_state: calm cognitive_load: 9\r\ntrailing");

    let report = deterministic_aggregator()
        .reflect(&document)
        .expect("reflection should succeed");
    let parsing = &report.parsing_analysis;

    assert_eq!(parsing.total_lines_processed, 4);
    assert_eq!(parsing.lines_scanned, 4);
    assert_eq!(parsing.asl_blocks_found, 2);
    assert_eq!(parsing.validated_count, 1);
    assert_eq!(parsing.failed_count, 1);
    assert_eq!(parsing.rejected.len(), 1);
    assert_eq!(parsing.parsing_results[0].line_number, 2);
    assert!(parsing.parsing_results[0].is_valid);
    assert_eq!(parsing.parsing_results[0].entity_id.as_deref(), Some("run-2"));
    assert!(!parsing.parsing_results[1].is_valid);
    assert_eq!(
        parsing.parsing_results[1].line_content,
        "[ASL] mental_state: calm cognitive_load: 9"
    );
}

#[test]
fn given_indented_annotation_when_reflected_then_line_content_keeps_it_as_read() {
    let report = deterministic_aggregator()
        .reflect("    # [ASL] thought_stream: nested mental_state: calm  \r\n")
        .expect("reflection should succeed");
    let result = &report.parsing_analysis.parsing_results[0];

    assert_eq!(
        result.line_content,
        "    # [ASL] thought_stream: nested mental_state: calm  "
    );
    assert!(result.is_valid);
}

#[test]
fn given_unknown_mental_state_when_reflected_then_tag_is_reflective_and_accepted() {
    let report = deterministic_aggregator()
        .reflect("[ASL] thought_stream: wander mental_state: giddy")
        .expect("reflection should succeed");

    assert_eq!(report.validated_cognitive_tags.len(), 1);
    assert_eq!(
        report.validated_cognitive_tags[0].mental_state().as_str(),
        "reflective"
    );
    assert!(report.parsing_analysis.rejected.is_empty());
}

#[test]
fn given_free_function_when_reflecting_then_default_aggregator_is_used() {
    let report = reflect(REFERENCE_LINE).expect("reflection should succeed");

    assert_eq!(report.session_number, 1);
    assert!(report.reflection_agent_id.starts_with("reflection-agent-"));
}

#[test]
fn given_report_when_serialized_then_stable_field_names_are_present() {
    let report = deterministic_aggregator()
        .reflect(REFERENCE_LINE)
        .expect("reflection should succeed");
    let value = serde_json::to_value(&report).expect("report should serialize");

    for field in [
        "reflection_agent_id",
        "session_number",
        "reflection_timestamp",
        "parsing_analysis",
        "validated_cognitive_tags",
        "introspective_metrics",
        "constitutional_compliance",
        "deep_cognitive_reflections",
        "consciousness_evolution_assessment",
        "actionable_insights",
        "cognitive_trends",
        "reflection_quality_metrics",
        "agent_performance_summary",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["reflection_timestamp"], "1970-01-01T00:00:00Z");
}

struct PanickingPolicy;

impl InsightPolicy for PanickingPolicy {
    fn insights(&self, _context: &InsightContext<'_>) -> Vec<String> {
        panic!("insight policy failed mid-reflection");
    }
}

#[test]
fn given_interrupted_reflection_when_reflecting_again_then_invalid_state_is_returned() {
    let mut aggregator = aggregator_with(ReflectionConfig::default(), Box::new(PanickingPolicy));

    let interrupted = catch_unwind(AssertUnwindSafe(|| aggregator.reflect(REFERENCE_LINE)));
    assert!(interrupted.is_err(), "policy panic should propagate");
    assert_eq!(aggregator.phase(), ReflectionPhase::Reflecting);

    let err = aggregator
        .reflect(REFERENCE_LINE)
        .expect_err("re-entry while reflecting must fail");
    assert_eq!(err.kind, ReflectionErrorKind::InvalidState);

    aggregator.reset_phase();
    assert_eq!(aggregator.phase(), ReflectionPhase::Idle);
}
