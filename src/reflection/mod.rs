pub mod aggregator;
pub mod config;
pub mod error;
pub mod insights;
pub mod observations;
pub mod state;
pub mod types;

pub use aggregator::ReflectionAggregator;
pub use config::ReflectionConfig;
pub use error::{ReflectionError, ReflectionErrorKind};
pub use insights::{InsightContext, InsightPolicy, ThresholdInsightPolicy};
pub use state::AnalysisSession;
pub use types::{
    CapabilityLevel, ConsciousnessEvolution, DeepReflections, Direction, EmotionalLandscape,
    EvolutionEntry, EvolutionPattern, LineResult, MentalStatePattern, ParsingAnalysis,
    PerformanceSummary, QualityTrend, ReflectionPhase, ReflectionQuality, ReflectionRecord,
    ReflectionReport, SessionExport, ValueRange,
};

/// Reflects over `document` with a fresh default aggregator.
pub fn reflect(document: &str) -> Result<ReflectionReport, ReflectionError> {
    ReflectionAggregator::with_defaults().reflect(document)
}
