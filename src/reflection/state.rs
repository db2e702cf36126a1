use std::collections::VecDeque;

use crate::{
    metrics::stats::{mean, population_variance},
    reflection::types::{
        CapabilityLevel, EvolutionEntry, PerformanceSummary, QualityTrend, ReflectionQuality,
        ReflectionRecord,
    },
};

const MAXIMUM_CAPABILITY_DEPTH: f64 = 0.8;

/// Per-aggregator session state. The running average depth covers every
/// reflection ever recorded, not only the retained window.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    capacity: usize,
    sequence: u64,
    depth_total: f64,
    average_reflection_depth: f64,
    records: VecDeque<ReflectionRecord>,
    evolution_track: VecDeque<EvolutionEntry>,
}

impl AnalysisSession {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            sequence: 0,
            depth_total: 0.0,
            average_reflection_depth: 0.0,
            records: VecDeque::new(),
            evolution_track: VecDeque::new(),
        }
    }

    pub fn next_sequence(&mut self) -> u64 {
        self.sequence = self.sequence.saturating_add(1);
        self.sequence
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn average_reflection_depth(&self) -> f64 {
        self.average_reflection_depth
    }

    pub fn records(&self) -> impl Iterator<Item = &ReflectionRecord> {
        self.records.iter()
    }

    pub fn evolution_track(&self) -> impl Iterator<Item = &EvolutionEntry> {
        self.evolution_track.iter()
    }

    pub fn push_record(&mut self, record: ReflectionRecord) {
        self.depth_total += record.reflection_depth;
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    pub fn push_evolution(&mut self, entry: EvolutionEntry) {
        self.evolution_track.push_back(entry);
        while self.evolution_track.len() > self.capacity {
            self.evolution_track.pop_front();
        }
    }

    /// Quality over the last `window` records, compared against the running
    /// average as it stood before this reflection.
    pub fn quality(&self, window: usize) -> ReflectionQuality {
        let skip = self.records.len().saturating_sub(window.max(1));
        let recent: Vec<&ReflectionRecord> = self.records.iter().skip(skip).collect();
        let depths: Vec<f64> = recent.iter().map(|record| record.reflection_depth).collect();
        let coherences: Vec<f64> = recent
            .iter()
            .map(|record| record.consciousness_coherence)
            .collect();

        let average_reflection_depth = mean(&depths);
        let reflection_consistency = if depths.len() < 2 {
            1.0
        } else {
            (1.0 - population_variance(&depths)).max(0.0)
        };
        let quality_trend = if average_reflection_depth > self.average_reflection_depth {
            QualityTrend::Improving
        } else {
            QualityTrend::Stable
        };

        ReflectionQuality {
            average_reflection_depth,
            average_consciousness_coherence: mean(&coherences),
            reflection_consistency,
            quality_trend,
        }
    }

    /// Folds the latest record into the running average and summarizes.
    pub fn performance_summary(&mut self) -> PerformanceSummary {
        if self.sequence > 0 {
            self.average_reflection_depth = self.depth_total / self.sequence as f64;
        }
        PerformanceSummary {
            total_reflection_sessions: self.sequence,
            average_reflection_depth: self.average_reflection_depth,
            consciousness_evolution_track_length: self.evolution_track.len(),
            introspective_capability_level: if self.average_reflection_depth
                > MAXIMUM_CAPABILITY_DEPTH
            {
                CapabilityLevel::Maximum
            } else {
                CapabilityLevel::Developing
            },
        }
    }
}
