use std::sync::Arc;

use crate::extractor::{
    coerce::{CoercionOutcome, UNKNOWN_LITERAL_CONFIDENCE, coerce},
    ports::{ExtractorTelemetryEvent, ExtractorTelemetryPort, NoopExtractorTelemetry},
    scanner::{match_marker, split_pairs},
    types::{Candidate, alias_target},
};

/// Line-at-a-time annotation reader. Counts every line it is shown and
/// degrades `parse_certainty` whenever a numeric value had to be replaced.
pub struct TagExtractor {
    telemetry: Arc<dyn ExtractorTelemetryPort>,
    lines_scanned: u64,
    parse_certainty: f64,
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new(Arc::new(NoopExtractorTelemetry))
    }
}

impl TagExtractor {
    pub fn new(telemetry: Arc<dyn ExtractorTelemetryPort>) -> Self {
        Self {
            telemetry,
            lines_scanned: 0,
            parse_certainty: 1.0,
        }
    }

    pub fn lines_scanned(&self) -> u64 {
        self.lines_scanned
    }

    pub fn parse_certainty(&self) -> f64 {
        self.parse_certainty
    }

    pub fn extract(&mut self, line: &str) -> Candidate {
        self.lines_scanned += 1;
        let line_number = self.lines_scanned;

        let Some(marked) = match_marker(line) else {
            self.telemetry
                .on_event(ExtractorTelemetryEvent::NoMarker { line_number });
            return Candidate::new();
        };
        self.telemetry.on_event(ExtractorTelemetryEvent::MarkerFound {
            line_number,
            label: marked.label.to_string(),
        });

        let mut candidate = Candidate::new();
        for pair in split_pairs(marked.body) {
            if pair.value.is_empty() {
                self.telemetry
                    .on_event(ExtractorTelemetryEvent::EmptyValueDropped {
                        line_number,
                        key: pair.key.to_string(),
                    });
                continue;
            }

            let key = match alias_target(pair.key) {
                Some(canonical) => {
                    self.telemetry.on_event(ExtractorTelemetryEvent::AliasApplied {
                        line_number,
                        alias: pair.key.to_string(),
                        canonical,
                    });
                    canonical
                }
                None => pair.key,
            };

            let coercion = coerce(key, pair.value);
            match coercion.outcome {
                CoercionOutcome::Clean => {}
                CoercionOutcome::Failed { key, penalty } => {
                    self.parse_certainty *= penalty;
                    self.telemetry
                        .on_event(ExtractorTelemetryEvent::CoercionFailed {
                            line_number,
                            key,
                            raw: pair.value.to_string(),
                            fallback: coercion.value.clone(),
                            parse_certainty: self.parse_certainty,
                        });
                }
                CoercionOutcome::UnknownLiteral { key, fallback } => {
                    self.telemetry
                        .on_event(ExtractorTelemetryEvent::UnknownLiteral {
                            line_number,
                            key,
                            literal: pair.value.to_string(),
                            fallback,
                            confidence: UNKNOWN_LITERAL_CONFIDENCE,
                        });
                }
            }

            self.telemetry
                .on_event(ExtractorTelemetryEvent::FieldExtracted {
                    line_number,
                    key: key.to_string(),
                    value: coercion.value.clone(),
                });
            candidate.insert(key.to_string(), coercion.value);
        }

        candidate
    }
}

