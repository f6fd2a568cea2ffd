//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::{default_trace_file, expand_tilde};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported on every exported span.
const SERVICE_NAME: &str = "keynav";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// The filter comes from `config.trace_level`, then `RUST_LOG`, then `info`.
/// Spans go to `config.trace_file`, or [`default_trace_file`] when unset.
///
/// Tracing is optional: if the trace directory cannot be created the call
/// returns without installing anything. Only the first successful call takes
/// effect.
///
/// # Example
///
/// ```rust,no_run
/// use keynav::observability::init_tracing;
/// use keynav::Config;
///
/// let config = Config {
///     trace_level: Some("keynav=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let filter = config
        .trace_level
        .as_deref()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let trace_file = config
        .trace_file
        .as_deref()
        .map_or_else(default_trace_file, |file| PathBuf::from(expand_tilde(file)));

    if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
