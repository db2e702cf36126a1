use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_complexity_scaling_factor() -> f64 {
    1.2
}

fn default_temporal_weight_decay() -> f64 {
    0.95
}

fn default_coherence_threshold() -> f64 {
    0.7
}

fn default_history_capacity() -> usize {
    100
}

/// Weights of the six component scores in overall cognitive health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HealthWeights {
    #[validate(range(min = 0.0, max = 1.0))]
    pub coherence: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub complexity: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub stability: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub resonance: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub temporal: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub clarity: f64,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            coherence: 0.25,
            complexity: 0.15,
            stability: 0.25,
            resonance: 0.15,
            temporal: 0.10,
            clarity: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalyzerConfig {
    #[serde(default = "default_complexity_scaling_factor")]
    #[validate(range(min = 0.0))]
    pub complexity_scaling_factor: f64,
    #[serde(default = "default_temporal_weight_decay")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub temporal_weight_decay: f64,
    /// Coherence below this is flagged in reflection insights.
    #[serde(default = "default_coherence_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub coherence_threshold: f64,
    #[serde(default = "default_history_capacity")]
    #[validate(range(min = 1))]
    pub history_capacity: usize,
    #[serde(default)]
    #[validate(nested)]
    pub health_weights: HealthWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complexity_scaling_factor: default_complexity_scaling_factor(),
            temporal_weight_decay: default_temporal_weight_decay(),
            coherence_threshold: default_coherence_threshold(),
            history_capacity: default_history_capacity(),
            health_weights: HealthWeights::default(),
        }
    }
}
