pub mod analyzer;
pub mod compliance;
pub mod config;
pub mod history;
pub mod stats;
pub mod tables;
pub mod types;

pub use analyzer::MetricsAnalyzer;
pub use compliance::assess_compliance;
pub use config::{AnalyzerConfig, HealthWeights};
pub use history::AnalysisHistory;
pub use types::{
    AnalysisExport, AnalysisRecord, AverageMetrics, CognitiveTrends, ComplianceFactors,
    ComplianceStatus, ConstitutionalCompliance, FlowPattern, MetricsBatch, SessionSummary, Trend,
};

use crate::tag::CognitiveTag;

/// Scores `tags` with the default configuration.
pub fn analyze(tags: &[CognitiveTag]) -> MetricsBatch {
    MetricsAnalyzer::default().analyze(tags)
}
