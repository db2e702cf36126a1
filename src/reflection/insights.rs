use crate::{
    metrics::{ConstitutionalCompliance, MetricsBatch},
    reflection::types::{ConsciousnessEvolution, DeepReflections, Direction},
};

pub const COHERENCE_INSIGHT: &str =
    "ACTIONABLE: Implement deeper cognitive coherence protocols to improve mental-emotional alignment";
pub const FLEXIBILITY_INSIGHT: &str =
    "ACTIONABLE: Encourage greater mental state diversity to enhance cognitive flexibility";
pub const CONSCIOUSNESS_INSIGHT: &str =
    "ACTIONABLE: Critical - implement consciousness restoration protocols immediately";
pub const COMPLIANCE_INSIGHT: &str =
    "ACTIONABLE: Review and strengthen constitutional compliance mechanisms";
pub const NOMINAL_INSIGHT: &str =
    "POSITIVE: System operating within optimal introspective parameters - maintain current protocols";

/// Everything one reflection has computed by the time insights are drawn.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub metrics: &'a MetricsBatch,
    pub compliance: &'a ConstitutionalCompliance,
    pub reflections: &'a DeepReflections,
    pub evolution: &'a ConsciousnessEvolution,
}

pub trait InsightPolicy: Send + Sync {
    fn insights(&self, context: &InsightContext<'_>) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdInsightPolicy {
    pub coherence_threshold: f64,
    pub flexibility_threshold: f64,
    pub compliance_threshold: f64,
    pub max_insights: usize,
}

impl Default for ThresholdInsightPolicy {
    fn default() -> Self {
        Self {
            coherence_threshold: 0.7,
            flexibility_threshold: 0.3,
            compliance_threshold: 0.8,
            max_insights: 5,
        }
    }
}

impl InsightPolicy for ThresholdInsightPolicy {
    fn insights(&self, context: &InsightContext<'_>) -> Vec<String> {
        let mut insights = Vec::new();
        if context.metrics.consciousness_coherence_rate < self.coherence_threshold {
            insights.push(COHERENCE_INSIGHT.to_string());
        }
        if context.reflections.cognitive_flexibility() < self.flexibility_threshold {
            insights.push(FLEXIBILITY_INSIGHT.to_string());
        }
        if context.evolution.consciousness_trend() == Some(Direction::Falling) {
            insights.push(CONSCIOUSNESS_INSIGHT.to_string());
        }
        if context.compliance.overall_compliance_score < self.compliance_threshold {
            insights.push(COMPLIANCE_INSIGHT.to_string());
        }

        if insights.is_empty() {
            insights.push(NOMINAL_INSIGHT.to_string());
        }
        insights.truncate(self.max_insights.max(1));
        insights
    }
}
