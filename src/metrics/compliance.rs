use crate::{
    metrics::{
        analyzer::load_certainty_coherence,
        stats::mean,
        types::{ComplianceFactors, ComplianceStatus, ConstitutionalCompliance},
    },
    tag::{CognitiveTag, DEFAULT_GOVERNING_RULE, DEFAULT_MEMORY_LINK},
};

pub const COMPLIANT_THRESHOLD: f64 = 0.8;
pub const PARTIAL_THRESHOLD: f64 = 0.5;

/// How well a batch cites its governing rules, links to memory, and keeps
/// certainty in line with load. Placeholder rule and link values count as
/// missing citations.
pub fn assess_compliance(tags: &[CognitiveTag]) -> ConstitutionalCompliance {
    if tags.is_empty() {
        return ConstitutionalCompliance {
            overall_compliance_score: 0.0,
            compliance_factors: ComplianceFactors {
                rule_citation: 0.0,
                memory_linkage: 0.0,
                certainty_calibration: 0.0,
            },
            constitutional_status: ComplianceStatus::NonCompliant,
        };
    }

    let share = |cited: fn(&CognitiveTag) -> bool| -> f64 {
        tags.iter().filter(|tag| cited(tag)).count() as f64 / tags.len() as f64
    };
    let calibration: Vec<f64> = tags
        .iter()
        .map(|tag| load_certainty_coherence(tag.cognitive_load(), tag.certainty_level()))
        .collect();

    let factors = ComplianceFactors {
        rule_citation: share(|tag| tag.governing_rule() != DEFAULT_GOVERNING_RULE),
        memory_linkage: share(|tag| tag.memory_link() != DEFAULT_MEMORY_LINK),
        certainty_calibration: mean(&calibration),
    };
    let overall = mean(&[
        factors.rule_citation,
        factors.memory_linkage,
        factors.certainty_calibration,
    ]);

    ConstitutionalCompliance {
        overall_compliance_score: overall,
        compliance_factors: factors,
        constitutional_status: status_for(overall),
    }
}

pub fn status_for(score: f64) -> ComplianceStatus {
    if score >= COMPLIANT_THRESHOLD {
        ComplianceStatus::Compliant
    } else if score >= PARTIAL_THRESHOLD {
        ComplianceStatus::Partial
    } else {
        ComplianceStatus::NonCompliant
    }
}
