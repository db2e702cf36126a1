use std::collections::BTreeMap;

use crate::{
    metrics::{
        ComplianceStatus, ConstitutionalCompliance, MetricsBatch,
        stats::{distribution, dominant},
    },
    reflection::types::{
        ConsciousnessEvolution, DeepReflections, Direction, EmotionalLandscape, EvolutionPattern,
        MentalStatePattern, ValueRange,
    },
    tag::{CognitiveTag, EmotionTone, MentalState, TemporalContext},
};

const EXCEPTIONAL_COHERENCE: f64 = 0.8;
const SUBOPTIMAL_COHERENCE: f64 = 0.5;
const HIGH_PRESENT_RATIO: f64 = 0.7;
const LOW_PRESENT_RATIO: f64 = 0.3;
const OBSERVATION_SATURATION: f64 = 10.0;

pub const NO_TAGS_OBSERVATION: &str = "No validated cognitive tags found - potential parsing or validation issues requiring introspective review";
pub const INSUFFICIENT_EVOLUTION_DATA: &str = "insufficient_data_for_evolution_analysis";

pub fn deep_reflections(
    tags: &[CognitiveTag],
    metrics: &MetricsBatch,
    compliance: &ConstitutionalCompliance,
) -> DeepReflections {
    let mut reflections = DeepReflections::default();
    if tags.is_empty() {
        reflections
            .cognitive_coherence_observations
            .push(NO_TAGS_OBSERVATION.to_string());
        return reflections;
    }

    let coherence = metrics.consciousness_coherence_rate;
    if coherence > EXCEPTIONAL_COHERENCE {
        reflections.cognitive_coherence_observations.push(format!(
            "Exceptional cognitive coherence detected (rate: {coherence:.3}) - indicating highly integrated consciousness states"
        ));
    } else if coherence < SUBOPTIMAL_COHERENCE {
        reflections.cognitive_coherence_observations.push(format!(
            "Suboptimal cognitive coherence (rate: {coherence:.3}) - suggests need for deeper introspective alignment"
        ));
    }

    reflections.mental_state_patterns = mental_state_pattern(tags);
    reflections.emotional_landscape_analysis = emotional_landscape(tags);

    let present = tags
        .iter()
        .filter(|tag| tag.temporal_context() == TemporalContext::Present)
        .count();
    let present_ratio = present as f64 / tags.len() as f64;
    if present_ratio > HIGH_PRESENT_RATIO {
        reflections.temporal_consciousness_insights.push(format!(
            "High present-moment awareness (ratio: {present_ratio:.3}) - indicates strong mindful consciousness"
        ));
    } else if present_ratio < LOW_PRESENT_RATIO {
        reflections.temporal_consciousness_insights.push(format!(
            "Limited present-moment focus (ratio: {present_ratio:.3}) - suggests temporal cognitive dispersion"
        ));
    }

    reflections.constitutional_alignment_reflections = alignment_reflections(compliance);
    reflections
}

fn mental_state_pattern(tags: &[CognitiveTag]) -> Option<MentalStatePattern> {
    let dominant_state = dominant(tags.iter().map(CognitiveTag::mental_state))?;
    let counts = distribution(tags.iter().map(CognitiveTag::mental_state));
    Some(MentalStatePattern {
        dominant_state,
        cognitive_flexibility: counts.len() as f64 / tags.len() as f64,
        state_distribution: counts.into_iter().collect::<BTreeMap<_, _>>(),
        introspective_observation: interpret_mental_state(dominant_state),
    })
}

fn emotional_landscape(tags: &[CognitiveTag]) -> Option<EmotionalLandscape> {
    let dominant_emotion = dominant(tags.iter().map(CognitiveTag::emotion_tone))?;
    let counts = distribution(tags.iter().map(CognitiveTag::emotion_tone));
    Some(EmotionalLandscape {
        dominant_emotion,
        emotional_range: counts.len(),
        emotional_stability: 1.0 - counts.len() as f64 / tags.len() as f64,
        introspective_interpretation: interpret_emotion(dominant_emotion),
    })
}

fn interpret_mental_state(state: MentalState) -> String {
    match state {
        MentalState::Focused => {
            "Sustained cognitive focus indicates optimal processing state for complex analysis"
                .to_string()
        }
        MentalState::Contemplative => {
            "Deep contemplative engagement suggests philosophical or strategic thinking processes"
                .to_string()
        }
        MentalState::Confused => "Confusion pattern indicates encounter with complex or ambiguous information requiring further processing".to_string(),
        MentalState::Reflective => {
            "Reflective dominance indicates active introspective processing and self-awareness"
                .to_string()
        }
        other => format!(
            "Mental state pattern centered on {other} suggests specialized cognitive engagement"
        ),
    }
}

fn interpret_emotion(tone: EmotionTone) -> String {
    match tone {
        EmotionTone::Neutral => {
            "Emotional neutrality indicates balanced, objective cognitive processing".to_string()
        }
        EmotionTone::Analytical => {
            "Analytical emotional tone suggests systematic, logical thought processes".to_string()
        }
        EmotionTone::Empathetic => {
            "Empathetic emotional engagement indicates consideration of multiple perspectives"
                .to_string()
        }
        EmotionTone::Critical => {
            "Critical emotional tone suggests evaluative and discriminating thought processes"
                .to_string()
        }
        other => format!(
            "Emotional landscape characterized by {other} suggests specific affective cognitive engagement"
        ),
    }
}

fn alignment_reflections(compliance: &ConstitutionalCompliance) -> Vec<String> {
    let score = compliance.overall_compliance_score;
    let factors = &compliance.compliance_factors;
    let mut reflections = vec![match compliance.constitutional_status {
        ComplianceStatus::Compliant => format!(
            "Constitutional alignment sustained (score: {score:.3}) - governing rules and memory links consistently cited"
        ),
        ComplianceStatus::Partial => format!(
            "Partial constitutional alignment (score: {score:.3}) - some reflections rely on default citations"
        ),
        ComplianceStatus::NonCompliant => format!(
            "Weak constitutional alignment (score: {score:.3}) - governing rule citations require review"
        ),
    }];
    if factors.certainty_calibration < SUBOPTIMAL_COHERENCE {
        reflections.push(format!(
            "Certainty poorly calibrated to cognitive load (calibration: {:.3})",
            factors.certainty_calibration
        ));
    }
    reflections
}

pub fn reflection_depth(reflections: &DeepReflections) -> f64 {
    let breadth =
        reflections.categories_with_content() as f64 / DeepReflections::CATEGORY_COUNT as f64;
    let volume = (reflections.observation_count() as f64 / OBSERVATION_SATURATION).min(1.0);
    (breadth + volume) / 2.0
}

fn direction(first: f64, last: f64) -> Direction {
    if last > first {
        Direction::Rising
    } else if last < first {
        Direction::Falling
    } else {
        Direction::Steady
    }
}

fn value_range(values: &[f64]) -> Option<ValueRange> {
    let last = *values.last()?;
    Some(ValueRange {
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        last,
    })
}

pub fn evolution_pattern(consciousness: Direction, depth: Direction) -> EvolutionPattern {
    match (consciousness, depth) {
        (Direction::Rising, Direction::Rising) => EvolutionPattern::BothRising,
        (Direction::Falling, Direction::Falling) => EvolutionPattern::BothFalling,
        (Direction::Rising, _) => EvolutionPattern::MixedRisingConsciousness,
        (Direction::Falling, _) => EvolutionPattern::MixedFallingConsciousness,
        (Direction::Steady, _) => EvolutionPattern::Stable,
    }
}

fn interpret_evolution(pattern: EvolutionPattern) -> &'static str {
    match pattern {
        EvolutionPattern::BothRising => {
            "Positive consciousness evolution - both awareness and introspective depth are expanding"
        }
        EvolutionPattern::BothFalling => {
            "Declining consciousness evolution - requires immediate introspective intervention"
        }
        EvolutionPattern::MixedRisingConsciousness => {
            "Mixed evolution pattern - consciousness expanding while depth holds or recedes, suggests need for deeper reflection"
        }
        EvolutionPattern::MixedFallingConsciousness => {
            "Paradoxical evolution - consciousness declining while depth holds or increases, indicates specialized introspective state"
        }
        EvolutionPattern::Stable => {
            "Stable consciousness state with consistent introspective engagement"
        }
    }
}

/// Compares the first and last tag of the batch in document order.
pub fn consciousness_evolution(tags: &[CognitiveTag]) -> ConsciousnessEvolution {
    let levels: Vec<f64> = tags.iter().map(CognitiveTag::consciousness_level).collect();
    let depths: Vec<f64> = tags.iter().map(CognitiveTag::introspective_depth).collect();

    let (Some(consciousness_range), Some(introspective_depth_range)) =
        (value_range(&levels), value_range(&depths))
    else {
        return insufficient_evolution();
    };
    if tags.len() < 2 {
        return insufficient_evolution();
    }

    let consciousness_trend = direction(levels[0], consciousness_range.last);
    let introspective_depth_trend = direction(depths[0], introspective_depth_range.last);
    let evolution_pattern = evolution_pattern(consciousness_trend, introspective_depth_trend);

    ConsciousnessEvolution::Assessed {
        consciousness_trend,
        introspective_depth_trend,
        consciousness_range,
        introspective_depth_range,
        evolution_pattern,
        evolution_interpretation: interpret_evolution(evolution_pattern).to_string(),
    }
}

fn insufficient_evolution() -> ConsciousnessEvolution {
    ConsciousnessEvolution::InsufficientData {
        evolution_assessment: INSUFFICIENT_EVOLUTION_DATA.to_string(),
    }
}
