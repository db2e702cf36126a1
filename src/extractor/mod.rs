pub mod coerce;
pub mod parser;
pub mod ports;
pub mod scanner;
pub mod telemetry;
pub mod types;

pub use parser::TagExtractor;
pub use ports::{ExtractorTelemetryEvent, ExtractorTelemetryPort, NoopExtractorTelemetry};
pub use telemetry::{RecordingExtractorTelemetry, TracingExtractorTelemetry};
pub use types::{Candidate, CandidateValue, render_line};

/// One-shot extraction with a throwaway extractor.
pub fn extract(line: &str) -> Candidate {
    TagExtractor::default().extract(line)
}
