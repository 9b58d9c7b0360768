//! Subscriber setup: `tracing` macros → OpenTelemetry → JSON span file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span export inside the data directory.
pub const SPAN_FILE_NAME: &str = "ancora-spans.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (default `"info"`). Spans are
/// exported to [`SPAN_FILE_NAME`] under [`get_data_dir`](crate::infrastructure::get_data_dir).
///
/// Tracing is optional: if the data directory cannot be created this returns
/// without installing anything, and calling it twice keeps the first subscriber.
///
/// # Example
///
/// ```rust
/// use ancora::observability::init_tracing;
/// use ancora::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "ancora")]);
    let provider = tracer::create_tracer_provider(data_dir.join(SPAN_FILE_NAME), resource);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(provider.tracer("ancora")));

    let _ = subscriber.try_init();
}
