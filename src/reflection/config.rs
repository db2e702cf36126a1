use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_history_capacity() -> usize {
    100
}

fn default_max_insights() -> usize {
    5
}

fn default_flexibility_threshold() -> f64 {
    0.3
}

fn default_compliance_threshold() -> f64 {
    0.8
}

fn default_quality_window() -> usize {
    5
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReflectionConfig {
    /// Reflection records and evolution entries kept per session.
    #[serde(default = "default_history_capacity")]
    #[validate(range(min = 1))]
    pub history_capacity: usize,
    #[serde(default = "default_max_insights")]
    #[validate(range(min = 1))]
    pub max_insights: usize,
    #[serde(default = "default_flexibility_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub flexibility_threshold: f64,
    #[serde(default = "default_compliance_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub compliance_threshold: f64,
    /// Number of most recent records the quality metrics look at.
    #[serde(default = "default_quality_window")]
    #[validate(range(min = 1))]
    pub quality_window: usize,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            max_insights: default_max_insights(),
            flexibility_threshold: default_flexibility_threshold(),
            compliance_threshold: default_compliance_threshold(),
            quality_window: default_quality_window(),
        }
    }
}
