use crate::tag::{EmotionTone, MentalState, TemporalHorizon};

/// Score for any key a table does not list.
pub const UNMAPPED_SCORE: f64 = 0.5;

pub type LoadBucket = (u8, u8, f64);

pub const MENTAL_EMOTION_COHERENCE: &[((MentalState, EmotionTone), f64)] = &[
    ((MentalState::Calm, EmotionTone::Neutral), 1.0),
    ((MentalState::Calm, EmotionTone::Positive), 0.9),
    ((MentalState::Calm, EmotionTone::Empathetic), 0.9),
    ((MentalState::Calm, EmotionTone::Analytical), 0.7),
    ((MentalState::Calm, EmotionTone::Critical), 0.4),
    ((MentalState::Calm, EmotionTone::Negative), 0.2),
    ((MentalState::Focused, EmotionTone::Analytical), 1.0),
    ((MentalState::Focused, EmotionTone::Neutral), 0.9),
    ((MentalState::Focused, EmotionTone::Critical), 0.8),
    ((MentalState::Focused, EmotionTone::Positive), 0.7),
    ((MentalState::Focused, EmotionTone::Empathetic), 0.5),
    ((MentalState::Focused, EmotionTone::Negative), 0.3),
    ((MentalState::Contemplative, EmotionTone::Neutral), 1.0),
    ((MentalState::Contemplative, EmotionTone::Analytical), 0.9),
    ((MentalState::Contemplative, EmotionTone::Empathetic), 0.8),
    ((MentalState::Contemplative, EmotionTone::Critical), 0.7),
    ((MentalState::Contemplative, EmotionTone::Positive), 0.6),
    ((MentalState::Contemplative, EmotionTone::Negative), 0.4),
    ((MentalState::Confused, EmotionTone::Negative), 0.8),
    ((MentalState::Confused, EmotionTone::Neutral), 0.7),
    ((MentalState::Confused, EmotionTone::Critical), 0.6),
    ((MentalState::Confused, EmotionTone::Analytical), 0.5),
    ((MentalState::Confused, EmotionTone::Empathetic), 0.4),
    ((MentalState::Confused, EmotionTone::Positive), 0.2),
];

pub const MENTAL_COMPLEXITY: &[(MentalState, f64)] = &[
    (MentalState::Calm, 0.2),
    (MentalState::Focused, 0.6),
    (MentalState::Contemplative, 0.8),
    (MentalState::Confused, 0.9),
];

pub const EMOTION_COMPLEXITY: &[(EmotionTone, f64)] = &[
    (EmotionTone::Neutral, 0.1),
    (EmotionTone::Positive, 0.3),
    (EmotionTone::Negative, 0.4),
    (EmotionTone::Analytical, 0.7),
    (EmotionTone::Critical, 0.8),
    (EmotionTone::Empathetic, 0.9),
];

pub const HORIZON_COMPLEXITY: &[(TemporalHorizon, f64)] = &[
    (TemporalHorizon::Immediate, 0.3),
    (TemporalHorizon::ShortTerm, 0.6),
    (TemporalHorizon::LongTerm, 0.9),
];

pub const EMOTION_INTENSITY: &[(EmotionTone, f64)] = &[
    (EmotionTone::Neutral, 0.1),
    (EmotionTone::Positive, 0.7),
    (EmotionTone::Negative, 0.8),
    (EmotionTone::Analytical, 0.5),
    (EmotionTone::Critical, 0.9),
    (EmotionTone::Empathetic, 0.8),
];

pub const HORIZON_ORIENTATION: &[(TemporalHorizon, f64)] = &[
    (TemporalHorizon::Immediate, 0.9),
    (TemporalHorizon::ShortTerm, 0.7),
    (TemporalHorizon::LongTerm, 0.6),
];

pub const MENTAL_CLARITY: &[(MentalState, f64)] = &[
    (MentalState::Focused, 0.9),
    (MentalState::Calm, 0.8),
    (MentalState::Contemplative, 0.7),
    (MentalState::Confused, 0.2),
];

pub const EMOTION_CLARITY: &[(EmotionTone, f64)] = &[
    (EmotionTone::Neutral, 0.9),
    (EmotionTone::Analytical, 0.8),
    (EmotionTone::Positive, 0.7),
    (EmotionTone::Empathetic, 0.7),
    (EmotionTone::Critical, 0.6),
    (EmotionTone::Negative, 0.4),
];

pub const HORIZON_CLARITY: &[(TemporalHorizon, f64)] = &[
    (TemporalHorizon::Immediate, 0.9),
    (TemporalHorizon::ShortTerm, 0.7),
    (TemporalHorizon::LongTerm, 0.5),
];

/// Inclusive `(min_load, max_load, score)` buckets; the first match wins.
pub const HORIZON_LOAD_BUCKETS: &[(TemporalHorizon, [LoadBucket; 3])] = &[
    (
        TemporalHorizon::Immediate,
        [(0, 4, 0.9), (4, 8, 0.8), (8, 12, 0.6)],
    ),
    (
        TemporalHorizon::ShortTerm,
        [(0, 6, 0.8), (6, 10, 0.9), (10, 12, 0.7)],
    ),
    (
        TemporalHorizon::LongTerm,
        [(0, 5, 0.7), (5, 9, 0.8), (9, 12, 0.9)],
    ),
];

pub fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or(UNMAPPED_SCORE, |(_, score)| *score)
}

pub fn lookup_horizon(table: &[(TemporalHorizon, f64)], horizon: Option<TemporalHorizon>) -> f64 {
    horizon.map_or(UNMAPPED_SCORE, |horizon| lookup(table, horizon))
}

pub fn mental_emotion_coherence(mental_state: MentalState, emotion_tone: EmotionTone) -> f64 {
    lookup(MENTAL_EMOTION_COHERENCE, (mental_state, emotion_tone))
}

pub fn horizon_load_coherence(horizon: Option<TemporalHorizon>, cognitive_load: u8) -> f64 {
    let Some(horizon) = horizon else {
        return UNMAPPED_SCORE;
    };
    HORIZON_LOAD_BUCKETS
        .iter()
        .find(|(candidate, _)| *candidate == horizon)
        .and_then(|(_, buckets)| {
            buckets
                .iter()
                .find(|(min, max, _)| (*min..=*max).contains(&cognitive_load))
        })
        .map_or(UNMAPPED_SCORE, |(_, _, score)| *score)
}
