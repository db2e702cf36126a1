use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub type EntityId = String;
pub type ResonanceMap = BTreeMap<String, serde_json::Value>;

pub const DEFAULT_INTROSPECTIVE_DEPTH: f64 = 0.5;
pub const DEFAULT_CONSCIOUSNESS_LEVEL: f64 = 0.5;
pub const MIN_COGNITIVE_LOAD: i64 = 1;
pub const MAX_COGNITIVE_LOAD: i64 = 10;

/// Placeholders filled in when an annotation omits the field.
pub const DEFAULT_THOUGHT_STREAM: &str = "(unlabeled)";
pub const DEFAULT_MEMORY_LINK: &str = "session-default";
pub const DEFAULT_GOVERNING_RULE: &str = "transparency-default";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} literal '{literal}'")]
pub struct UnknownLiteral {
    pub field: &'static str,
    pub literal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentalState {
    Calm,
    Focused,
    Confused,
    Contemplative,
    Decisive,
    Uncertain,
    Reflective,
}

impl MentalState {
    pub const ALL: [MentalState; 7] = [
        Self::Calm,
        Self::Focused,
        Self::Confused,
        Self::Contemplative,
        Self::Decisive,
        Self::Uncertain,
        Self::Reflective,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Focused => "focused",
            Self::Confused => "confused",
            Self::Contemplative => "contemplative",
            Self::Decisive => "decisive",
            Self::Uncertain => "uncertain",
            Self::Reflective => "reflective",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTone {
    Neutral,
    Positive,
    Negative,
    Analytical,
    Empathetic,
    Critical,
}

impl EmotionTone {
    pub const ALL: [EmotionTone; 6] = [
        Self::Neutral,
        Self::Positive,
        Self::Negative,
        Self::Analytical,
        Self::Empathetic,
        Self::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Analytical => "analytical",
            Self::Empathetic => "empathetic",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalContext {
    Past,
    Present,
    Future,
    Timeless,
    Cyclical,
}

impl TemporalContext {
    pub const ALL: [TemporalContext; 5] = [
        Self::Past,
        Self::Present,
        Self::Future,
        Self::Timeless,
        Self::Cyclical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
            Self::Timeless => "timeless",
            Self::Cyclical => "cyclical",
        }
    }

    /// Planning horizon used by the horizon-keyed metric tables. `Past` has no
    /// horizon and falls through to table defaults.
    pub fn horizon(self) -> Option<TemporalHorizon> {
        match self {
            Self::Present => Some(TemporalHorizon::Immediate),
            Self::Future => Some(TemporalHorizon::ShortTerm),
            Self::Timeless | Self::Cyclical => Some(TemporalHorizon::LongTerm),
            Self::Past => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalHorizon {
    Immediate,
    ShortTerm,
    LongTerm,
}

fn parse_literal<T: Copy>(
    field: &'static str,
    raw: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, UnknownLiteral> {
    let needle = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| name(*candidate).eq_ignore_ascii_case(needle))
        .ok_or_else(|| UnknownLiteral {
            field,
            literal: needle.to_string(),
        })
}

impl FromStr for MentalState {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal("mental_state", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for EmotionTone {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal("emotion_tone", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for TemporalContext {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal("temporal_context", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for MentalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EmotionTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TemporalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unchecked field values for a tag. Turned into a [`CognitiveTag`] only by
/// [`CognitiveTag::new`], which runs every invariant rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDraft {
    pub thought_stream: String,
    pub mental_state: MentalState,
    pub emotion_tone: EmotionTone,
    pub cognitive_load: i64,
    pub temporal_context: TemporalContext,
    pub certainty_level: f64,
    pub memory_link: String,
    pub governing_rule: String,
    #[serde(default)]
    pub enhancement_suggestion: Option<String>,
    #[serde(default)]
    pub diplomatic_enhancement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CognitiveTag {
    pub(crate) entity_id: EntityId,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) creation_moment: OffsetDateTime,
    pub(crate) thought_stream: String,
    pub(crate) mental_state: MentalState,
    pub(crate) emotion_tone: EmotionTone,
    pub(crate) cognitive_load: u8,
    pub(crate) temporal_context: TemporalContext,
    pub(crate) certainty_level: f64,
    pub(crate) memory_link: String,
    pub(crate) governing_rule: String,
    pub(crate) enhancement_suggestion: Option<String>,
    pub(crate) diplomatic_enhancement: Option<String>,
    pub(crate) introspective_depth: f64,
    pub(crate) consciousness_level: f64,
    pub(crate) consciousness_resonance: ResonanceMap,
}

impl CognitiveTag {
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn creation_moment(&self) -> OffsetDateTime {
        self.creation_moment
    }

    pub fn thought_stream(&self) -> &str {
        &self.thought_stream
    }

    pub fn mental_state(&self) -> MentalState {
        self.mental_state
    }

    pub fn emotion_tone(&self) -> EmotionTone {
        self.emotion_tone
    }

    pub fn cognitive_load(&self) -> u8 {
        self.cognitive_load
    }

    pub fn temporal_context(&self) -> TemporalContext {
        self.temporal_context
    }

    pub fn certainty_level(&self) -> f64 {
        self.certainty_level
    }

    pub fn memory_link(&self) -> &str {
        &self.memory_link
    }

    pub fn governing_rule(&self) -> &str {
        &self.governing_rule
    }

    pub fn enhancement_suggestion(&self) -> Option<&str> {
        self.enhancement_suggestion.as_deref()
    }

    pub fn diplomatic_enhancement(&self) -> Option<&str> {
        self.diplomatic_enhancement.as_deref()
    }

    pub fn introspective_depth(&self) -> f64 {
        self.introspective_depth
    }

    pub fn consciousness_level(&self) -> f64 {
        self.consciousness_level
    }

    pub fn consciousness_resonance(&self) -> &ResonanceMap {
        &self.consciousness_resonance
    }

    /// Raises introspective depth by `depth` and consciousness by a tenth of
    /// it, both capped at 1.0. Negative or non-finite input is ignored.
    pub fn enhance_consciousness(&mut self, depth: f64) {
        let depth = if depth.is_finite() { depth.max(0.0) } else { 0.0 };
        self.introspective_depth = (self.introspective_depth + depth).min(1.0);
        self.consciousness_level = (self.consciousness_level + depth * 0.1).min(1.0);
    }

    /// Merges `memory` into the resonance map; incoming keys overwrite.
    pub fn resonate_with_memory<I>(&mut self, memory: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        for (key, value) in memory {
            self.consciousness_resonance.insert(key, value);
        }
    }
}
