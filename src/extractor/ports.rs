use crate::extractor::types::CandidateValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractorTelemetryEvent {
    NoMarker {
        line_number: u64,
    },
    MarkerFound {
        line_number: u64,
        label: String,
    },
    AliasApplied {
        line_number: u64,
        alias: String,
        canonical: &'static str,
    },
    FieldExtracted {
        line_number: u64,
        key: String,
        value: CandidateValue,
    },
    EmptyValueDropped {
        line_number: u64,
        key: String,
    },
    CoercionFailed {
        line_number: u64,
        key: &'static str,
        raw: String,
        fallback: CandidateValue,
        parse_certainty: f64,
    },
    UnknownLiteral {
        line_number: u64,
        key: &'static str,
        literal: String,
        fallback: &'static str,
        confidence: f64,
    },
}

pub trait ExtractorTelemetryPort: Send + Sync {
    fn on_event(&self, event: ExtractorTelemetryEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractorTelemetry;

impl ExtractorTelemetryPort for NoopExtractorTelemetry {
    fn on_event(&self, _event: ExtractorTelemetryEvent) {}
}
