use aethero::reflection::{
    ConsciousnessEvolution, Direction, EvolutionPattern,
    insights::{
        COHERENCE_INSIGHT, COMPLIANCE_INSIGHT, CONSCIOUSNESS_INSIGHT, FLEXIBILITY_INSIGHT,
    },
    observations::{INSUFFICIENT_EVOLUTION_DATA, NO_TAGS_OBSERVATION},
};

use super::{REFERENCE_LINE, deterministic_aggregator};

#[test]
fn given_document_without_tags_when_reflected_then_only_the_no_tags_observation_is_made() {
    let report = deterministic_aggregator()
        .reflect("just prose\nand more prose")
        .expect("reflection should succeed");
    let reflections = &report.deep_cognitive_reflections;

    assert_eq!(
        reflections.cognitive_coherence_observations,
        vec![NO_TAGS_OBSERVATION.to_string()]
    );
    assert!(reflections.mental_state_patterns.is_none());
    assert!(reflections.emotional_landscape_analysis.is_none());
    assert!(reflections.temporal_consciousness_insights.is_empty());
    assert!(reflections.constitutional_alignment_reflections.is_empty());
}

#[test]
fn given_document_without_tags_when_reflected_then_threshold_insights_fire() {
    let report = deterministic_aggregator()
        .reflect("")
        .expect("reflection should succeed");

    assert_eq!(
        report.actionable_insights,
        vec![
            COHERENCE_INSIGHT.to_string(),
            FLEXIBILITY_INSIGHT.to_string(),
            COMPLIANCE_INSIGHT.to_string(),
        ]
    );
    assert_eq!(
        report.consciousness_evolution_assessment,
        ConsciousnessEvolution::InsufficientData {
            evolution_assessment: INSUFFICIENT_EVOLUTION_DATA.to_string(),
        }
    );
}

#[test]
fn given_present_focused_tag_when_reflected_then_patterns_and_present_awareness_are_noted() {
    let report = deterministic_aggregator()
        .reflect(REFERENCE_LINE)
        .expect("reflection should succeed");
    let reflections = &report.deep_cognitive_reflections;

    let pattern = reflections
        .mental_state_patterns
        .as_ref()
        .expect("mental state pattern should exist");
    assert_eq!(pattern.dominant_state.as_str(), "focused");
    assert_eq!(pattern.cognitive_flexibility, 1.0);

    let landscape = reflections
        .emotional_landscape_analysis
        .as_ref()
        .expect("emotional landscape should exist");
    assert_eq!(landscape.emotional_range, 1);
    assert_eq!(landscape.emotional_stability, 0.0);

    assert_eq!(reflections.temporal_consciousness_insights.len(), 1);
    assert!(reflections.temporal_consciousness_insights[0].starts_with("High present-moment"));
    assert!(!reflections.constitutional_alignment_reflections.is_empty());
}

#[test]
fn given_tied_states_when_reflected_then_first_seen_state_dominates() {
    let document = "[ASL] mental_state: contemplative\n[ASL] mental_state: focused\n[ASL] mental_state: focused\n[ASL] mental_state: contemplative";

    let report = deterministic_aggregator()
        .reflect(document)
        .expect("reflection should succeed");
    let pattern = report
        .deep_cognitive_reflections
        .mental_state_patterns
        .expect("mental state pattern should exist");

    assert_eq!(pattern.dominant_state.as_str(), "contemplative");
    assert_eq!(pattern.state_distribution.len(), 2);
}

#[test]
fn given_fresh_tags_when_evolution_assessed_then_pattern_is_stable() {
    let document = format!("{REFERENCE_LINE}\n{REFERENCE_LINE}");

    let report = deterministic_aggregator()
        .reflect(&document)
        .expect("reflection should succeed");

    match report.consciousness_evolution_assessment {
        ConsciousnessEvolution::Assessed {
            evolution_pattern,
            consciousness_range,
            ..
        } => {
            assert_eq!(evolution_pattern, EvolutionPattern::Stable);
            assert_eq!(consciousness_range.last, 0.5);
        }
        other => panic!("expected an assessment, got {other:?}"),
    }
}

#[test]
fn given_fresh_tags_with_equal_levels_when_reflected_then_no_falling_consciousness_insight() {
    let document = format!("{REFERENCE_LINE}\n{REFERENCE_LINE}\n{REFERENCE_LINE}");

    let report = deterministic_aggregator()
        .reflect(&document)
        .expect("reflection should succeed");

    // Equal first and last levels read as steady, never as falling.
    assert_eq!(
        report.consciousness_evolution_assessment.consciousness_trend(),
        Some(Direction::Steady)
    );
    assert!(
        !report
            .actionable_insights
            .iter()
            .any(|insight| insight == CONSCIOUSNESS_INSIGHT)
    );
}

#[test]
fn given_reflection_when_depth_is_computed_then_it_is_normalized() {
    let report = deterministic_aggregator()
        .reflect(REFERENCE_LINE)
        .expect("reflection should succeed");
    let depth = report.reflection_quality_metrics.average_reflection_depth;

    assert!(depth > 0.0 && depth <= 1.0, "depth out of range: {depth}");
}
