use time::OffsetDateTime;

use crate::{
    metrics::{
        config::AnalyzerConfig,
        history::AnalysisHistory,
        stats::{mean, sample_variance},
        tables::{
            EMOTION_CLARITY, EMOTION_COMPLEXITY, EMOTION_INTENSITY, HORIZON_CLARITY,
            HORIZON_COMPLEXITY, HORIZON_ORIENTATION, MENTAL_CLARITY, MENTAL_COMPLEXITY,
            horizon_load_coherence, lookup, lookup_horizon, mental_emotion_coherence,
        },
        types::MetricsBatch,
    },
    tag::{CognitiveTag, EmotionTone, TemporalHorizon},
};

const COHERENCE_VARIANCE_WEIGHT: f64 = 0.5;
const COHERENCE_VARIANCE_PENALTY_CAP: f64 = 0.3;
const SINGLE_STATE_STABILITY: f64 = 0.9;
const STABILITY_TRANSITION_WEIGHT: f64 = 0.6;
const FIRST_TAG_CONTINUITY: f64 = 0.8;
const TONE_VARIETY_STEP: f64 = 0.1;
const TONE_VARIETY_CAP: f64 = 0.2;
const CLARITY_CONSISTENCY_BONUS: f64 = 0.1;
const HEALTH_BALANCE_BONUS: f64 = 0.05;

/// Computes the seven batch scores. `analyze` is a pure function of its
/// input; `analyze_and_record` also appends to the trend history.
#[derive(Debug, Clone)]
pub struct MetricsAnalyzer {
    config: AnalyzerConfig,
    history: AnalysisHistory,
}

impl Default for MetricsAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl MetricsAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            history: AnalysisHistory::new(config.history_capacity),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    pub fn analyze(&self, tags: &[CognitiveTag]) -> MetricsBatch {
        if tags.is_empty() {
            tracing::debug!(target: "metrics", "empty_batch");
            return MetricsBatch::empty();
        }

        let coherence = consciousness_coherence_rate(tags);
        let complexity = cognitive_complexity_index(tags, self.config.complexity_scaling_factor);
        let stability = mental_stability_factor(tags);
        let resonance = emotional_resonance_depth(tags);
        let temporal = temporal_awareness_level(tags, self.config.temporal_weight_decay);
        let clarity = introspective_clarity_score(tags);

        let mut batch = MetricsBatch {
            consciousness_coherence_rate: coherence,
            cognitive_complexity_index: complexity,
            mental_stability_factor: stability,
            emotional_resonance_depth: resonance,
            temporal_awareness_level: temporal,
            introspective_clarity_score: clarity,
            overall_cognitive_health: 0.0,
            tag_count: tags.len(),
        };
        batch.overall_cognitive_health = self.overall_cognitive_health(&batch);

        tracing::info!(
            target: "metrics",
            tag_count = tags.len(),
            coherence = batch.consciousness_coherence_rate,
            overall_health = batch.overall_cognitive_health,
            "batch_analyzed"
        );
        batch
    }

    pub fn analyze_and_record(&mut self, tags: &[CognitiveTag], at: OffsetDateTime) -> MetricsBatch {
        let batch = self.analyze(tags);
        self.history.record(tags, batch, at);
        batch
    }

    fn overall_cognitive_health(&self, batch: &MetricsBatch) -> f64 {
        let weights = &self.config.health_weights;
        let weighted = batch.consciousness_coherence_rate * weights.coherence
            + batch.cognitive_complexity_index * weights.complexity
            + batch.mental_stability_factor * weights.stability
            + batch.emotional_resonance_depth * weights.resonance
            + batch.temporal_awareness_level * weights.temporal
            + batch.introspective_clarity_score * weights.clarity;
        let balance_bonus =
            (HEALTH_BALANCE_BONUS - sample_variance(&batch.component_scores()) * 0.1).max(0.0);
        (weighted + balance_bonus).min(1.0)
    }
}

fn load_of(tag: &CognitiveTag) -> f64 {
    f64::from(tag.cognitive_load())
}

fn horizon_of(tag: &CognitiveTag) -> Option<TemporalHorizon> {
    tag.temporal_context().horizon()
}

/// Agreement with the expected inverse relation `certainty ~ 1 - load/12`.
pub fn load_certainty_coherence(cognitive_load: u8, certainty_level: f64) -> f64 {
    let expected = (1.0 - f64::from(cognitive_load) / 12.0).max(0.1);
    (1.0 - (certainty_level - expected).abs()).max(0.0)
}

pub fn certainty_emotion_alignment(certainty_level: f64, emotion_tone: EmotionTone) -> f64 {
    match emotion_tone {
        EmotionTone::Positive | EmotionTone::Neutral => certainty_level,
        EmotionTone::Negative => 1.0 - certainty_level,
        EmotionTone::Analytical | EmotionTone::Empathetic | EmotionTone::Critical => 0.7,
    }
}

pub fn load_temporal_coherence(cognitive_load: u8, horizon: Option<TemporalHorizon>) -> f64 {
    let load = f64::from(cognitive_load);
    match horizon {
        Some(TemporalHorizon::LongTerm) => (load / 10.0 + 0.3).min(1.0),
        Some(TemporalHorizon::ShortTerm) => (1.0 - (load - 6.0).abs() / 8.0).max(0.3),
        Some(TemporalHorizon::Immediate) | None => (1.0 - load / 12.0).max(0.2),
    }
}

fn introspective_coherence(tag: &CognitiveTag) -> f64 {
    let load_complexity = (load_of(tag) / 10.0).min(1.0);

    let complexity = lookup(MENTAL_COMPLEXITY, tag.mental_state()) * 0.4
        + lookup(EMOTION_COMPLEXITY, tag.emotion_tone()) * 0.3
        + load_complexity * 0.3;
    let expected_certainty = (1.0 - complexity * 0.7).max(0.1);
    let complexity_alignment = (1.0 - (tag.certainty_level() - expected_certainty).abs()).max(0.0);

    let emotional_authenticity = (mental_emotion_coherence(tag.mental_state(), tag.emotion_tone())
        + certainty_emotion_alignment(tag.certainty_level(), tag.emotion_tone()))
        / 2.0;

    let temporal_complexity = lookup_horizon(HORIZON_COMPLEXITY, horizon_of(tag));
    let temporal_realism = (1.0 - (temporal_complexity - load_complexity).abs()).max(0.3);

    mean(&[complexity_alignment, emotional_authenticity, temporal_realism])
}

pub fn tag_coherence(tag: &CognitiveTag) -> f64 {
    mental_emotion_coherence(tag.mental_state(), tag.emotion_tone()) * 0.3
        + load_certainty_coherence(tag.cognitive_load(), tag.certainty_level()) * 0.25
        + horizon_load_coherence(horizon_of(tag), tag.cognitive_load()) * 0.25
        + introspective_coherence(tag) * 0.2
}

pub fn consciousness_coherence_rate(tags: &[CognitiveTag]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = tags.iter().map(tag_coherence).collect();
    let penalty =
        (sample_variance(&scores) * COHERENCE_VARIANCE_WEIGHT).min(COHERENCE_VARIANCE_PENALTY_CAP);
    (mean(&scores) - penalty).clamp(0.0, 1.0)
}

pub fn cognitive_complexity_index(tags: &[CognitiveTag], scaling_factor: f64) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = tags
        .iter()
        .map(|tag| {
            (load_of(tag) / 10.0).min(1.0) * 0.3
                + lookup(MENTAL_COMPLEXITY, tag.mental_state()) * 0.25
                + lookup(EMOTION_COMPLEXITY, tag.emotion_tone()) * 0.2
                + lookup_horizon(HORIZON_COMPLEXITY, horizon_of(tag)) * 0.15
                + (1.0 - tag.certainty_level()) * 0.1
        })
        .collect();
    (mean(&scores) * scaling_factor).min(1.0)
}

pub fn mental_stability_factor(tags: &[CognitiveTag]) -> f64 {
    if tags.is_empty() {
        return MetricsBatch::EMPTY_STABILITY;
    }

    let transitions = tags
        .windows(2)
        .filter(|pair| pair[0].mental_state() != pair[1].mental_state())
        .count();
    let base = if transitions == 0 {
        SINGLE_STATE_STABILITY
    } else {
        1.0 - STABILITY_TRANSITION_WEIGHT * transitions as f64 / (tags.len() - 1) as f64
    };

    let loads: Vec<f64> = tags.iter().map(load_of).collect();
    let certainties: Vec<f64> = tags.iter().map(CognitiveTag::certainty_level).collect();
    let load_factor = 1.0 - (mean(&loads) / 15.0).min(0.3);
    let certainty_factor = mean(&certainties) * 0.2 + 0.8;

    (base * load_factor * certainty_factor).clamp(0.0, 1.0)
}

pub fn emotional_resonance_depth(tags: &[CognitiveTag]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = tags
        .iter()
        .map(|tag| {
            lookup(EMOTION_INTENSITY, tag.emotion_tone()) * 0.4
                + mental_emotion_coherence(tag.mental_state(), tag.emotion_tone()) * 0.4
                + certainty_emotion_alignment(tag.certainty_level(), tag.emotion_tone()) * 0.2
        })
        .collect();

    let mut tones: Vec<EmotionTone> = tags.iter().map(CognitiveTag::emotion_tone).collect();
    tones.sort_unstable();
    tones.dedup();
    let variety_bonus = (tones.len() as f64 * TONE_VARIETY_STEP).min(TONE_VARIETY_CAP);

    (mean(&scores) + variety_bonus).min(1.0)
}

fn continuity(previous: &CognitiveTag, current: &CognitiveTag) -> f64 {
    let state = if previous.mental_state() == current.mental_state() {
        0.9
    } else {
        0.6
    };
    let load = (1.0 - (load_of(previous) - load_of(current)).abs() / 10.0).max(0.0);
    let certainty = (1.0 - (previous.certainty_level() - current.certainty_level()).abs()).max(0.0);
    mean(&[state, load, certainty])
}

pub fn temporal_awareness_level(tags: &[CognitiveTag], decay: f64) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let mut scores = Vec::with_capacity(tags.len());
    for (index, tag) in tags.iter().enumerate() {
        let continuity = match index.checked_sub(1).and_then(|prev| tags.get(prev)) {
            Some(previous) => continuity(previous, tag),
            None => FIRST_TAG_CONTINUITY,
        };
        let score = lookup_horizon(HORIZON_ORIENTATION, horizon_of(tag)) * 0.4
            + continuity * 0.3
            + load_temporal_coherence(tag.cognitive_load(), horizon_of(tag)) * 0.3;
        scores.push(score * decay.powi(index as i32));
    }
    mean(&scores)
}

pub fn introspective_clarity_score(tags: &[CognitiveTag]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let scores: Vec<f64> = tags
        .iter()
        .map(|tag| {
            tag.certainty_level() * 0.25
                + lookup(MENTAL_CLARITY, tag.mental_state()) * 0.25
                + lookup(EMOTION_CLARITY, tag.emotion_tone()) * 0.2
                + lookup_horizon(HORIZON_CLARITY, horizon_of(tag)) * 0.15
                + (1.0 - load_of(tag) / 12.0).max(0.0) * 0.15
        })
        .collect();
    let consistency_bonus = (CLARITY_CONSISTENCY_BONUS - sample_variance(&scores)).max(0.0);
    (mean(&scores) + consistency_bonus).min(1.0)
}
