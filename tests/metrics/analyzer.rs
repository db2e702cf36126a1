use aethero::{
    metrics::{
        AnalyzerConfig, MetricsAnalyzer, MetricsBatch, analyze,
        analyzer::{mental_stability_factor, temporal_awareness_level},
        tables::mental_emotion_coherence,
    },
    tag::{EmotionTone, MentalState, TemporalContext},
};

use super::{focused, tag, tag_at};

fn assert_close(actual: f64, expected: f64, score: &str) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "{score}: expected {expected}, got {actual}"
    );
}

#[test]
fn given_empty_batch_when_analyzed_then_neutral_defaults_are_returned() {
    let batch = analyze(&[]);

    assert_eq!(batch, MetricsBatch::empty());
    assert_eq!(batch.consciousness_coherence_rate, 0.0);
    assert_eq!(batch.mental_stability_factor, 0.5);
    assert_eq!(batch.overall_cognitive_health, 0.0);
    assert_eq!(batch.tag_count, 0);
}

#[test]
fn given_focused_analytical_pair_when_looked_up_then_coherence_is_one() {
    assert_eq!(
        mental_emotion_coherence(MentalState::Focused, EmotionTone::Analytical),
        1.0
    );
}

#[test]
fn given_unmapped_pair_when_looked_up_then_neutral_half_is_returned() {
    assert_eq!(
        mental_emotion_coherence(MentalState::Decisive, EmotionTone::Empathetic),
        0.5
    );
}

#[test]
fn given_alternating_states_when_stability_is_scored_then_it_is_lower_than_single_state() {
    let steady = vec![focused(5, 0.6), focused(5, 0.6), focused(5, 0.6)];
    let alternating = vec![
        focused(5, 0.6),
        tag(MentalState::Contemplative, EmotionTone::Analytical, 5, 0.6),
        focused(5, 0.6),
    ];

    assert!(mental_stability_factor(&alternating) < mental_stability_factor(&steady));
}

#[test]
fn given_mixed_batch_when_analyzed_then_every_score_is_normalized() {
    let tags = vec![
        focused(4, 0.7),
        tag(MentalState::Confused, EmotionTone::Negative, 9, 0.2),
        tag(MentalState::Calm, EmotionTone::Positive, 2, 0.9),
        tag(MentalState::Uncertain, EmotionTone::Critical, 6, 0.4),
    ];

    let batch = analyze(&tags);

    assert_eq!(batch.tag_count, 4);
    for score in batch
        .component_scores()
        .into_iter()
        .chain([batch.overall_cognitive_health])
    {
        assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
    }
}

#[test]
fn given_same_batch_when_analyzed_twice_then_scores_are_identical() {
    let analyzer = MetricsAnalyzer::default();
    let tags = vec![focused(5, 0.6), focused(7, 0.4)];

    assert_eq!(analyzer.analyze(&tags), analyzer.analyze(&tags));
    assert!(analyzer.history().is_empty());
}

#[test]
fn given_lower_decay_when_temporal_awareness_is_scored_then_later_tags_weigh_less() {
    let tags = vec![focused(5, 0.6), focused(5, 0.6), focused(5, 0.6)];

    assert!(temporal_awareness_level(&tags, 0.5) < temporal_awareness_level(&tags, 0.95));
    assert!(temporal_awareness_level(&tags, 1.0) <= 1.0);
}

#[test]
fn given_scaling_factor_when_configured_then_complexity_follows_it() {
    let tags = vec![focused(5, 0.6)];
    let base = MetricsAnalyzer::new(AnalyzerConfig {
        complexity_scaling_factor: 1.0,
        ..AnalyzerConfig::default()
    });
    let halved = MetricsAnalyzer::new(AnalyzerConfig {
        complexity_scaling_factor: 0.5,
        ..AnalyzerConfig::default()
    });

    let full = base.analyze(&tags).cognitive_complexity_index;
    let half = halved.analyze(&tags).cognitive_complexity_index;
    assert!((full * 0.5 - half).abs() < 1e-12);
}

#[test]
fn given_mixed_batch_when_analyzed_then_every_score_matches_the_reference_values() {
    let batch = analyze(&[
        tag_at(MentalState::Focused, EmotionTone::Analytical, 6, TemporalContext::Present, 0.8),
        tag_at(MentalState::Confused, EmotionTone::Negative, 9, TemporalContext::Future, 0.2),
        tag_at(MentalState::Calm, EmotionTone::Positive, 2, TemporalContext::Timeless, 0.9),
        tag_at(MentalState::Reflective, EmotionTone::Empathetic, 4, TemporalContext::Past, 0.5),
    ]);

    assert_eq!(batch.tag_count, 4);
    assert_close(batch.consciousness_coherence_rate, 0.7816626654166667, "coherence");
    assert_close(batch.cognitive_complexity_index, 0.6435, "complexity");
    assert_close(batch.mental_stability_factor, 0.2576, "stability");
    assert_close(batch.emotional_resonance_depth, 0.955, "resonance");
    assert_close(batch.temporal_awareness_level, 0.58258125, "temporal");
    assert_close(batch.introspective_clarity_score, 0.6642359375, "clarity");
    assert_close(batch.overall_cognitive_health, 0.6688906173626332, "health");
}
