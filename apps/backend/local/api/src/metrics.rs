use axum::response::IntoResponse;
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{Tracer, TracerProvider},
};
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info,medica_api=debug";

/// Upper bounds, in seconds, of the `prediction_duration_seconds` histogram.
const PREDICTION_BUCKETS: &[f64] = &[0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Console logging, optional OTLP span export and the Prometheus recorder.
pub fn init_telemetry() {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
    let otel_layer = endpoint
        .as_deref()
        .and_then(otlp_tracer)
        .map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));
    let exporting = otel_layer.is_some();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(log_filter())
        .with(otel_layer)
        .init();

    match (endpoint, exporting) {
        (Some(endpoint), true) => tracing::info!(%endpoint, "Exporting spans over OTLP"),
        (Some(endpoint), false) => tracing::warn!(%endpoint, "OTLP exporter unavailable, spans stay local"),
        (None, _) => tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, spans stay local"),
    }

    init_metrics();
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn otlp_tracer(endpoint: &str) -> Option<Tracer> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .ok()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .build();
    let tracer = provider.tracer(env!("CARGO_PKG_NAME"));
    opentelemetry::global::set_tracer_provider(provider);

    Some(tracer)
}

fn prometheus_builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full("prediction_duration_seconds".to_string()),
        PREDICTION_BUCKETS,
    )
}

fn init_metrics() {
    let handle = match prometheus_builder().and_then(PrometheusBuilder::install_recorder) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!("Prometheus recorder not installed, /metrics stays empty: {}", e);
            return;
        }
    };

    if PROMETHEUS_HANDLE.set(handle).is_err() {
        tracing::warn!("Prometheus metrics already initialized");
        return;
    }

    metrics::describe_counter!("predictions_total", "Prediction requests by outcome");
    metrics::describe_histogram!(
        "prediction_duration_seconds",
        "Time spent handling a prediction request in seconds"
    );
}

/// Prometheus text exposition, or an empty body when no recorder is installed.
pub async fn handler() -> impl IntoResponse {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}
