use std::collections::BTreeMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    extractor::Candidate,
    metrics::{AnalysisExport, CognitiveTrends, ConstitutionalCompliance, MetricsBatch},
    tag::{CognitiveTag, EmotionTone, MentalState},
    validator::RejectionRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionPhase {
    Idle,
    Reflecting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineResult {
    pub line_number: usize,
    pub line_content: String,
    pub parsed_components: Candidate,
    pub is_valid: bool,
    pub entity_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsingAnalysis {
    pub total_lines_processed: usize,
    pub asl_blocks_found: usize,
    pub validated_count: usize,
    pub failed_count: usize,
    pub lines_scanned: u64,
    pub parse_certainty: f64,
    pub parsing_results: Vec<LineResult>,
    pub rejected: Vec<RejectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentalStatePattern {
    pub dominant_state: MentalState,
    pub state_distribution: BTreeMap<MentalState, usize>,
    pub cognitive_flexibility: f64,
    pub introspective_observation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalLandscape {
    pub dominant_emotion: EmotionTone,
    pub emotional_range: usize,
    pub emotional_stability: f64,
    pub introspective_interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeepReflections {
    pub cognitive_coherence_observations: Vec<String>,
    pub mental_state_patterns: Option<MentalStatePattern>,
    pub emotional_landscape_analysis: Option<EmotionalLandscape>,
    pub temporal_consciousness_insights: Vec<String>,
    pub constitutional_alignment_reflections: Vec<String>,
}

impl DeepReflections {
    pub const CATEGORY_COUNT: usize = 5;

    pub fn cognitive_flexibility(&self) -> f64 {
        self.mental_state_patterns
            .as_ref()
            .map_or(0.0, |pattern| pattern.cognitive_flexibility)
    }

    pub fn categories_with_content(&self) -> usize {
        [
            !self.cognitive_coherence_observations.is_empty(),
            self.mental_state_patterns.is_some(),
            self.emotional_landscape_analysis.is_some(),
            !self.temporal_consciousness_insights.is_empty(),
            !self.constitutional_alignment_reflections.is_empty(),
        ]
        .into_iter()
        .filter(|has_content| *has_content)
        .count()
    }

    /// List categories count one per entry; a present pattern counts once.
    pub fn observation_count(&self) -> usize {
        self.cognitive_coherence_observations.len()
            + usize::from(self.mental_state_patterns.is_some())
            + usize::from(self.emotional_landscape_analysis.is_some())
            + self.temporal_consciousness_insights.len()
            + self.constitutional_alignment_reflections.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Rising,
    Falling,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionPattern {
    BothRising,
    BothFalling,
    MixedRisingConsciousness,
    MixedFallingConsciousness,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub last: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConsciousnessEvolution {
    InsufficientData {
        evolution_assessment: String,
    },
    Assessed {
        consciousness_trend: Direction,
        introspective_depth_trend: Direction,
        consciousness_range: ValueRange,
        introspective_depth_range: ValueRange,
        evolution_pattern: EvolutionPattern,
        evolution_interpretation: String,
    },
}

impl ConsciousnessEvolution {
    pub fn consciousness_trend(&self) -> Option<Direction> {
        match self {
            Self::Assessed {
                consciousness_trend,
                ..
            } => Some(*consciousness_trend),
            Self::InsufficientData { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionRecord {
    pub sequence: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub document_length: usize,
    pub validated_tags_count: usize,
    pub reflection_depth: f64,
    pub consciousness_coherence: f64,
    pub key_insights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvolutionEntry {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub average_consciousness_level: f64,
    pub average_introspective_depth: f64,
    pub cognitive_coherence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTrend {
    Improving,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReflectionQuality {
    pub average_reflection_depth: f64,
    pub average_consciousness_coherence: f64,
    pub reflection_consistency: f64,
    pub quality_trend: QualityTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityLevel {
    Maximum,
    Developing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_reflection_sessions: u64,
    pub average_reflection_depth: f64,
    pub consciousness_evolution_track_length: usize,
    pub introspective_capability_level: CapabilityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectionReport {
    pub reflection_agent_id: String,
    pub session_number: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub reflection_timestamp: OffsetDateTime,
    pub parsing_analysis: ParsingAnalysis,
    pub validated_cognitive_tags: Vec<CognitiveTag>,
    pub introspective_metrics: MetricsBatch,
    pub constitutional_compliance: ConstitutionalCompliance,
    pub deep_cognitive_reflections: DeepReflections,
    pub consciousness_evolution_assessment: ConsciousnessEvolution,
    pub actionable_insights: Vec<String>,
    pub cognitive_trends: CognitiveTrends,
    pub reflection_quality_metrics: ReflectionQuality,
    pub agent_performance_summary: PerformanceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionExport {
    pub reflection_agent_id: String,
    pub session_number: u64,
    pub average_reflection_depth: f64,
    pub reflection_history: Vec<ReflectionRecord>,
    pub consciousness_evolution_track: Vec<EvolutionEntry>,
    pub metrics_analysis: AnalysisExport,
}
