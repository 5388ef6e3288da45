//! # OpenTelemetry Tracer Provider
//!
//! Built only when the service runs with `--traced`. Spans are exported over
//! OTLP/HTTP (protobuf) when an endpoint is configured and printed to stdout
//! otherwise. The endpoint is used verbatim, so it should include the
//! `/v1/traces` path.
//!
//! The provider is not installed globally: `main` hands the tracer to the router
//! state, and keeps the provider to flush and shut it down on exit.

use crate::config::ServiceConfig;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::trace::{SdkTracerProvider, Tracer};
use opentelemetry_sdk::Resource;
use thiserror::Error;
use tracing::info;

/// Instrumentation scope for spans created by this service.
pub const TRACER_NAME: &str = "bee-api";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to set up traces exporter: {0}")]
    TracesExporterSetup(String),
    #[error("failed to shut down tracer provider: {0}")]
    Shutdown(String),
}

/// Builds the tracer provider described by `config`.
pub fn build_tracer_provider(config: &ServiceConfig) -> Result<SdkTracerProvider, TelemetryError> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();
    let builder = SdkTracerProvider::builder().with_resource(resource);

    let provider = match &config.otlp_endpoint {
        Some(endpoint) => {
            let exporter = SpanExporter::builder()
                .with_http()
                .with_endpoint(endpoint.clone())
                .with_headers(config.otlp_headers.clone().unwrap_or_default())
                .with_protocol(Protocol::HttpBinary)
                .build()
                .map_err(|e| TelemetryError::TracesExporterSetup(e.to_string()))?;
            info!(%endpoint, "Exporting spans over OTLP/HTTP");
            builder.with_batch_exporter(exporter).build()
        }
        None => {
            info!("No OTLP endpoint configured, printing spans to stdout");
            builder
                .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
                .build()
        }
    };

    Ok(provider)
}

/// Returns the tracer handlers use to open spans.
pub fn service_tracer(provider: &SdkTracerProvider) -> Tracer {
    provider.tracer(TRACER_NAME)
}

/// Flushes pending spans and stops the exporter.
pub fn shutdown_tracer_provider(provider: SdkTracerProvider) -> Result<(), TelemetryError> {
    provider
        .shutdown()
        .map_err(|e| TelemetryError::Shutdown(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn stdout_provider_builds_without_endpoint() {
        let config = ServiceConfig::try_parse_from(["bee-api", "--traced"]).unwrap();
        let provider = build_tracer_provider(&config).unwrap();
        let _tracer = service_tracer(&provider);
        shutdown_tracer_provider(provider).unwrap();
    }
}
