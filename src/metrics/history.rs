use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::{
    metrics::{
        stats::{dominant, mean},
        types::{
            AnalysisExport, AnalysisRecord, AverageMetrics, CognitiveTrends, FlowPattern,
            MetricsBatch, SessionSummary, Trend,
        },
    },
    tag::CognitiveTag,
};

const TREND_WINDOW: usize = 5;
const TREND_DELTA: f64 = 0.05;
const INSUFFICIENT_TREND_DATA: &str = "Insufficient data for trend analysis";

/// Rolling record of analyzed batches. Both the metric records and the flow
/// patterns keep at most `capacity` entries, dropping the oldest.
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    capacity: usize,
    records: VecDeque<AnalysisRecord>,
    flow_patterns: VecDeque<FlowPattern>,
}

impl AnalysisHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            records: VecDeque::new(),
            flow_patterns: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter()
    }

    /// Empty batches are not recorded.
    pub fn record(&mut self, tags: &[CognitiveTag], metrics: MetricsBatch, at: OffsetDateTime) {
        let (Some(dominant_mental_state), Some(dominant_emotion)) = (
            dominant(tags.iter().map(CognitiveTag::mental_state)),
            dominant(tags.iter().map(CognitiveTag::emotion_tone)),
        ) else {
            return;
        };

        let loads: Vec<f64> = tags
            .iter()
            .map(|tag| f64::from(tag.cognitive_load()))
            .collect();
        let certainties: Vec<f64> = tags.iter().map(CognitiveTag::certainty_level).collect();

        self.records.push_back(AnalysisRecord {
            metrics,
            analyzed_at: at,
        });
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }

        self.flow_patterns.push_back(FlowPattern {
            analyzed_at: at,
            tag_count: tags.len(),
            dominant_mental_state,
            dominant_emotion,
            avg_cognitive_load: mean(&loads),
            avg_certainty: mean(&certainties),
            overall_health: metrics.overall_cognitive_health,
        });
        while self.flow_patterns.len() > self.capacity {
            self.flow_patterns.pop_front();
        }
    }

    pub fn cognitive_trends(&self) -> CognitiveTrends {
        if self.records.len() < 2 {
            return CognitiveTrends::InsufficientData {
                message: INSUFFICIENT_TREND_DATA.to_string(),
            };
        }

        let recent: Vec<&MetricsBatch> = self
            .records
            .iter()
            .skip(self.records.len().saturating_sub(TREND_WINDOW))
            .map(|record| &record.metrics)
            .collect();
        let series = |pick: fn(&MetricsBatch) -> f64| -> Vec<f64> {
            recent.iter().map(|metrics| pick(metrics)).collect()
        };
        let health: Vec<f64> = self
            .records
            .iter()
            .map(|record| record.metrics.overall_cognitive_health)
            .collect();

        CognitiveTrends::Available {
            coherence_trend: trend(&series(|m| m.consciousness_coherence_rate)),
            stability_trend: trend(&series(|m| m.mental_stability_factor)),
            complexity_trend: trend(&series(|m| m.cognitive_complexity_index)),
            overall_health_trend: trend(&series(|m| m.overall_cognitive_health)),
            session_count: self.records.len(),
            average_health: mean(&health),
        }
    }

    pub fn average_metrics(&self) -> Option<AverageMetrics> {
        if self.records.is_empty() {
            return None;
        }
        let average = |pick: fn(&MetricsBatch) -> f64| -> f64 {
            let values: Vec<f64> = self.records.iter().map(|r| pick(&r.metrics)).collect();
            mean(&values)
        };
        Some(AverageMetrics {
            avg_consciousness_coherence: average(|m| m.consciousness_coherence_rate),
            avg_cognitive_complexity: average(|m| m.cognitive_complexity_index),
            avg_mental_stability: average(|m| m.mental_stability_factor),
            avg_emotional_resonance: average(|m| m.emotional_resonance_depth),
            avg_temporal_awareness: average(|m| m.temporal_awareness_level),
            avg_introspective_clarity: average(|m| m.introspective_clarity_score),
            avg_overall_health: average(|m| m.overall_cognitive_health),
        })
    }

    pub fn export(&self) -> AnalysisExport {
        let session_duration_minutes = match (self.records.front(), self.records.back()) {
            (Some(first), Some(last)) => {
                (last.analyzed_at - first.analyzed_at).as_seconds_f64() / 60.0
            }
            _ => 0.0,
        };

        AnalysisExport {
            analysis_history: self.records.iter().cloned().collect(),
            cognitive_flow_patterns: self.flow_patterns.iter().cloned().collect(),
            session_summary: SessionSummary {
                total_analyses: self.records.len(),
                session_duration_minutes,
                average_metrics: self.average_metrics(),
            },
        }
    }
}

/// Mean step between consecutive values, bucketed at +/- 0.05.
pub fn trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }
    let steps: Vec<f64> = values.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let change = mean(&steps);
    if change > TREND_DELTA {
        Trend::Improving
    } else if change < -TREND_DELTA {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
