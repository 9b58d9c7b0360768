//! OpenTelemetry tracer provider with file-based span export.
//!
//! Each exported batch becomes one JSON line per span in a rotating file, which
//! keeps traces inspectable with `jq` without running a collector.

use super::file_writer::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::Key;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::UNIX_EPOCH;

/// One exported span, flattened for line-oriented JSON.
#[derive(Debug, Serialize)]
struct SpanRecord<'a> {
    service: &'a str,
    name: &'a str,
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    start_unix_nanos: u128,
    duration_micros: u128,
    attributes: BTreeMap<String, String>,
    events: Vec<&'a str>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> SpanRecord<'a> {
    fn new(service: &'a str, span: &'a SpanData) -> Self {
        let start = span.start_time.duration_since(UNIX_EPOCH).unwrap_or_default();
        let duration = span.end_time.duration_since(span.start_time).unwrap_or_default();

        let (status, error) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.as_ref())),
        };

        Self {
            service,
            name: span.name.as_ref(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id: (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id)),
            start_unix_nanos: start.as_nanos(),
            duration_micros: duration.as_micros(),
            attributes: span
                .attributes
                .iter()
                .map(|kv| (kv.key.to_string(), kv.value.to_string()))
                .collect(),
            events: span.events.iter().map(|event| event.name.as_ref()).collect(),
            status,
            error,
        }
    }
}

/// Span exporter writing [`SpanRecord`] lines to a rotating file.
struct FileSpanExporter {
    writer: RotatingWriter,
    service: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        let service = resource
            .get(Key::new("service.name"))
            .map_or_else(|| "ancora".to_string(), |v| v.to_string());

        Self {
            writer: RotatingWriter::new(file_path),
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        for span in batch {
            let line = serde_json::to_string(&SpanRecord::new(&self.service, span))?;
            self.writer.write_line(&line)?;
        }
        Ok(())
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = self
            .write_batch(&batch)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider that exports every finished span to `file_path`.
///
/// Uses the simple (non-batched) span processor, so spans are written as soon
/// as they close.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_are_written_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "ancora-test")]);
        let provider = create_tracer_provider(path.clone(), resource);

        provider.tracer("test").in_span("vehicle_lookup", |_cx| {});
        let _ = provider.force_flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(record["name"], "vehicle_lookup");
        assert_eq!(record["service"], "ancora-test");
        assert_eq!(record["trace_id"].as_str().unwrap().len(), 32);
        assert!(record.get("parent_span_id").is_none());
    }
}
