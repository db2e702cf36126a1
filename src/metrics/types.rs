use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::tag::{EmotionTone, MentalState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsBatch {
    pub consciousness_coherence_rate: f64,
    pub cognitive_complexity_index: f64,
    pub mental_stability_factor: f64,
    pub emotional_resonance_depth: f64,
    pub temporal_awareness_level: f64,
    pub introspective_clarity_score: f64,
    pub overall_cognitive_health: f64,
    pub tag_count: usize,
}

impl MetricsBatch {
    pub const EMPTY_STABILITY: f64 = 0.5;

    /// Result for a batch with no tags.
    pub fn empty() -> Self {
        Self {
            consciousness_coherence_rate: 0.0,
            cognitive_complexity_index: 0.0,
            mental_stability_factor: Self::EMPTY_STABILITY,
            emotional_resonance_depth: 0.0,
            temporal_awareness_level: 0.0,
            introspective_clarity_score: 0.0,
            overall_cognitive_health: 0.0,
            tag_count: 0,
        }
    }

    /// The six component scores, in health-weight order.
    pub fn component_scores(&self) -> [f64; 6] {
        [
            self.consciousness_coherence_rate,
            self.cognitive_complexity_index,
            self.mental_stability_factor,
            self.emotional_resonance_depth,
            self.temporal_awareness_level,
            self.introspective_clarity_score,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFactors {
    pub rule_citation: f64,
    pub memory_linkage: f64,
    pub certainty_calibration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstitutionalCompliance {
    pub overall_compliance_score: f64,
    pub compliance_factors: ComplianceFactors,
    pub constitutional_status: ComplianceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub metrics: MetricsBatch,
    #[serde(with = "time::serde::rfc3339")]
    pub analyzed_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowPattern {
    #[serde(with = "time::serde::rfc3339")]
    pub analyzed_at: OffsetDateTime,
    pub tag_count: usize,
    pub dominant_mental_state: MentalState,
    pub dominant_emotion: EmotionTone,
    pub avg_cognitive_load: f64,
    pub avg_certainty: f64,
    pub overall_health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CognitiveTrends {
    InsufficientData {
        message: String,
    },
    Available {
        coherence_trend: Trend,
        stability_trend: Trend,
        complexity_trend: Trend,
        overall_health_trend: Trend,
        session_count: usize,
        average_health: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    pub avg_consciousness_coherence: f64,
    pub avg_cognitive_complexity: f64,
    pub avg_mental_stability: f64,
    pub avg_emotional_resonance: f64,
    pub avg_temporal_awareness: f64,
    pub avg_introspective_clarity: f64,
    pub avg_overall_health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_analyses: usize,
    pub session_duration_minutes: f64,
    pub average_metrics: Option<AverageMetrics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisExport {
    pub analysis_history: Vec<AnalysisRecord>,
    pub cognitive_flow_patterns: Vec<FlowPattern>,
    pub session_summary: SessionSummary,
}
