use anyhow::Context;
use opentelemetry::global;
use opentelemetry::sdk::propagation::TraceContextPropagator;
use opentelemetry::sdk::trace;
use opentelemetry::sdk::Resource;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

/// Installs the global subscriber: JSON logs filtered by `RUST_LOG`, plus an
/// OTLP span exporter when `export_traces` is set.
pub fn config_telemetry(service_name: &str, export_traces: bool) -> anyhow::Result<()> {
    // Needed to forward ordinary log statements (actix, mio) to our tracing subscriber.
    tracing_log::LogTracer::init().context("Failed to initialize log tracer")?;

    let subscriber = Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_thread_names(true),
        );

    let otel_layer = if export_traces {
        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_env())
            .with_trace_config(trace::config().with_resource(Resource::new(vec![
                KeyValue::new("service.name", service_name.to_owned()),
            ])))
            .install_batch(opentelemetry::runtime::Tokio)
            .context("Failed to initialize otlp tracer")?;
        global::set_text_map_propagator(TraceContextPropagator::new());
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing::subscriber::set_global_default(subscriber.with(otel_layer))
        .context("Failed to install `tracing` subscriber")
}

pub fn shutdown_global_tracer_provider() {
    global::shutdown_tracer_provider();
}
