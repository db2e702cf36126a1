use std::sync::Mutex;

use crate::extractor::ports::{ExtractorTelemetryEvent, ExtractorTelemetryPort};

/// Forwards extractor events to `tracing` under the `extractor` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExtractorTelemetry;

impl ExtractorTelemetryPort for TracingExtractorTelemetry {
    fn on_event(&self, event: ExtractorTelemetryEvent) {
        match event {
            ExtractorTelemetryEvent::NoMarker { line_number } => {
                tracing::trace!(target: "extractor", line_number = line_number, "no_marker");
            }
            ExtractorTelemetryEvent::MarkerFound { line_number, label } => {
                tracing::debug!(
                    target: "extractor",
                    line_number = line_number,
                    label = %label,
                    "marker_found"
                );
            }
            ExtractorTelemetryEvent::AliasApplied {
                line_number,
                alias,
                canonical,
            } => {
                tracing::debug!(
                    target: "extractor",
                    line_number = line_number,
                    alias = %alias,
                    canonical = canonical,
                    "alias_applied"
                );
            }
            ExtractorTelemetryEvent::FieldExtracted {
                line_number,
                key,
                value,
            } => {
                tracing::debug!(
                    target: "extractor",
                    line_number = line_number,
                    key = %key,
                    value = %value,
                    "field_extracted"
                );
            }
            ExtractorTelemetryEvent::EmptyValueDropped { line_number, key } => {
                tracing::debug!(
                    target: "extractor",
                    line_number = line_number,
                    key = %key,
                    "empty_value_dropped"
                );
            }
            ExtractorTelemetryEvent::CoercionFailed {
                line_number,
                key,
                raw,
                fallback,
                parse_certainty,
            } => {
                tracing::warn!(
                    target: "extractor",
                    line_number = line_number,
                    key = key,
                    raw = %raw,
                    fallback = %fallback,
                    parse_certainty = parse_certainty,
                    "coercion_failed"
                );
            }
            ExtractorTelemetryEvent::UnknownLiteral {
                line_number,
                key,
                literal,
                fallback,
                confidence,
            } => {
                tracing::info!(
                    target: "extractor",
                    line_number = line_number,
                    key = key,
                    literal = %literal,
                    fallback = fallback,
                    confidence = confidence,
                    "unknown_literal_substituted"
                );
            }
        }
    }
}

/// Keeps every event in memory, for tests and diagnostics dumps.
#[derive(Debug, Default)]
pub struct RecordingExtractorTelemetry {
    events: Mutex<Vec<ExtractorTelemetryEvent>>,
}

impl RecordingExtractorTelemetry {
    pub fn events(&self) -> Vec<ExtractorTelemetryEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ExtractorTelemetryPort for RecordingExtractorTelemetry {
    fn on_event(&self, event: ExtractorTelemetryEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
