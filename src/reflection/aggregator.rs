use std::sync::Arc;

use crate::{
    extractor::{ExtractorTelemetryPort, TagExtractor, TracingExtractorTelemetry},
    metrics::{AnalyzerConfig, MetricsAnalyzer, assess_compliance, stats::mean},
    reflection::{
        config::ReflectionConfig,
        error::{ReflectionError, invalid_state},
        insights::{InsightContext, InsightPolicy, ThresholdInsightPolicy},
        observations::{consciousness_evolution, deep_reflections, reflection_depth},
        state::AnalysisSession,
        types::{
            EvolutionEntry, LineResult, ParsingAnalysis, ReflectionPhase, ReflectionRecord,
            ReflectionReport, SessionExport,
        },
    },
    tag::{Clock, CognitiveTag, IdSource, SystemClock, UuidIdSource},
    validator::TagValidator,
};

const KEY_INSIGHTS_PER_RECORD: usize = 3;

/// Runs the whole pipeline over a document and keeps the session history
/// that quality and performance summaries are computed from.
pub struct ReflectionAggregator {
    id: String,
    config: ReflectionConfig,
    phase: ReflectionPhase,
    session: AnalysisSession,
    analyzer: MetricsAnalyzer,
    insight_policy: Box<dyn InsightPolicy>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    telemetry: Arc<dyn ExtractorTelemetryPort>,
}

impl Default for ReflectionAggregator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ReflectionAggregator {
    pub fn new(
        config: ReflectionConfig,
        analyzer: MetricsAnalyzer,
        insight_policy: Box<dyn InsightPolicy>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
        telemetry: Arc<dyn ExtractorTelemetryPort>,
    ) -> Self {
        let id = format!("reflection-agent-{}", ids.next_id());
        Self {
            id,
            session: AnalysisSession::new(config.history_capacity),
            config,
            phase: ReflectionPhase::Idle,
            analyzer,
            insight_policy,
            clock,
            ids,
            telemetry,
        }
    }

    pub fn with_defaults() -> Self {
        Self::from_config(
            AnalyzerConfig::default(),
            ReflectionConfig::default(),
            Arc::new(SystemClock),
            Arc::new(UuidIdSource),
        )
    }

    /// Threshold insights drawn from both configs, tracing-backed telemetry.
    pub fn from_config(
        analyzer: AnalyzerConfig,
        reflection: ReflectionConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        let policy = ThresholdInsightPolicy {
            coherence_threshold: analyzer.coherence_threshold,
            flexibility_threshold: reflection.flexibility_threshold,
            compliance_threshold: reflection.compliance_threshold,
            max_insights: reflection.max_insights,
        };
        Self::new(
            reflection,
            MetricsAnalyzer::new(analyzer),
            Box::new(policy),
            clock,
            ids,
            Arc::new(TracingExtractorTelemetry),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> ReflectionPhase {
        self.phase
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    pub fn analyzer(&self) -> &MetricsAnalyzer {
        &self.analyzer
    }

    /// Returns to idle after a reflection that never completed.
    pub fn reset_phase(&mut self) {
        if self.phase == ReflectionPhase::Reflecting {
            tracing::warn!(target: "reflection", agent_id = %self.id, "interrupted_reflection_reset");
        }
        self.phase = ReflectionPhase::Idle;
    }

    pub fn reflect(&mut self, document: &str) -> Result<ReflectionReport, ReflectionError> {
        if self.phase == ReflectionPhase::Reflecting {
            return Err(invalid_state(format!(
                "reflection agent '{}' is already reflecting",
                self.id
            )));
        }

        self.phase = ReflectionPhase::Reflecting;
        let report = self.run(document);
        self.phase = ReflectionPhase::Idle;
        Ok(report)
    }

    fn run(&mut self, document: &str) -> ReflectionReport {
        let session_number = self.session.next_sequence();
        let reflection_timestamp = self.clock.now();
        tracing::info!(
            target: "reflection",
            agent_id = %self.id,
            session_number = session_number,
            document_length = document.len(),
            "reflection_started"
        );

        let (parsing_analysis, tags) = self.parse(document);
        let metrics = self
            .analyzer
            .analyze_and_record(&tags, reflection_timestamp);
        let compliance = assess_compliance(&tags);
        let reflections = deep_reflections(&tags, &metrics, &compliance);
        let evolution = consciousness_evolution(&tags);
        let insights = self.insight_policy.insights(&InsightContext {
            metrics: &metrics,
            compliance: &compliance,
            reflections: &reflections,
            evolution: &evolution,
        });
        let depth = reflection_depth(&reflections);

        self.session.push_record(ReflectionRecord {
            sequence: session_number,
            timestamp: reflection_timestamp,
            document_length: document.chars().count(),
            validated_tags_count: tags.len(),
            reflection_depth: depth,
            consciousness_coherence: metrics.consciousness_coherence_rate,
            key_insights: insights
                .iter()
                .take(KEY_INSIGHTS_PER_RECORD)
                .cloned()
                .collect(),
        });
        if !tags.is_empty() {
            let levels: Vec<f64> = tags.iter().map(CognitiveTag::consciousness_level).collect();
            let depths: Vec<f64> = tags.iter().map(CognitiveTag::introspective_depth).collect();
            self.session.push_evolution(EvolutionEntry {
                timestamp: reflection_timestamp,
                average_consciousness_level: mean(&levels),
                average_introspective_depth: mean(&depths),
                cognitive_coherence: metrics.consciousness_coherence_rate,
            });
        }

        let reflection_quality_metrics = self.session.quality(self.config.quality_window);
        let agent_performance_summary = self.session.performance_summary();

        tracing::info!(
            target: "reflection",
            agent_id = %self.id,
            session_number = session_number,
            tags = tags.len(),
            rejected = parsing_analysis.rejected.len(),
            reflection_depth = depth,
            insights = insights.len(),
            "reflection_completed"
        );

        ReflectionReport {
            reflection_agent_id: self.id.clone(),
            session_number,
            reflection_timestamp,
            parsing_analysis,
            validated_cognitive_tags: tags,
            introspective_metrics: metrics,
            constitutional_compliance: compliance,
            deep_cognitive_reflections: reflections,
            consciousness_evolution_assessment: evolution,
            actionable_insights: insights,
            cognitive_trends: self.analyzer.history().cognitive_trends(),
            reflection_quality_metrics,
            agent_performance_summary,
        }
    }

    fn parse(&self, document: &str) -> (ParsingAnalysis, Vec<CognitiveTag>) {
        let mut extractor = TagExtractor::new(Arc::clone(&self.telemetry));
        let mut validator = TagValidator::new(Arc::clone(&self.clock), Arc::clone(&self.ids));
        let mut parsing_results = Vec::new();
        let mut total_lines_processed = 0;

        for (index, raw_line) in document.split('\n').enumerate() {
            total_lines_processed += 1;
            let line = raw_line.trim_end_matches('\r');
            let candidate = extractor.extract(line);
            if candidate.is_empty() {
                continue;
            }

            let entity_id = validator
                .validate(&candidate)
                .ok()
                .map(|tag| tag.entity_id().to_string());
            parsing_results.push(LineResult {
                line_number: index + 1,
                line_content: line.to_string(),
                parsed_components: candidate,
                is_valid: entity_id.is_some(),
                entity_id,
            });
        }

        let analysis = ParsingAnalysis {
            total_lines_processed,
            asl_blocks_found: parsing_results.len(),
            validated_count: validator.accepted().len(),
            failed_count: validator.rejected().len(),
            lines_scanned: extractor.lines_scanned(),
            parse_certainty: extractor.parse_certainty(),
            parsing_results,
            rejected: validator.rejected().to_vec(),
        };
        (analysis, validator.accepted().to_vec())
    }

    /// Serializable snapshot of the session for callers that persist it.
    pub fn export_session(&self) -> SessionExport {
        SessionExport {
            reflection_agent_id: self.id.clone(),
            session_number: self.session.sequence(),
            average_reflection_depth: self.session.average_reflection_depth(),
            reflection_history: self.session.records().cloned().collect(),
            consciousness_evolution_track: self.session.evolution_track().copied().collect(),
            metrics_analysis: self.analyzer.history().export(),
        }
    }
}
