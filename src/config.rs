//! Command-line and environment configuration for the service.

use clap::Parser;
use std::collections::HashMap;
use std::net::SocketAddr;

/// Runtime settings. Every flag can also be supplied through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "bee-api", about = "In-memory CRUD service for bees")]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "BEE_API_LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// Attach OpenTelemetry instrumentation to the root route.
    #[arg(long, env = "BEE_API_TRACED", default_value_t = false)]
    pub traced: bool,

    /// `service.name` resource attribute on exported spans.
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "bee-api")]
    pub service_name: String,

    /// OTLP/HTTP traces endpoint. Spans go to stdout when unset.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Extra OTLP headers as `key=value` pairs separated by commas (exporter credentials).
    #[arg(long, env = "OTEL_EXPORTER_OTLP_HEADERS", value_parser = parse_headers)]
    pub otlp_headers: Option<HashMap<String, String>>,
}

fn parse_headers(raw: &str) -> Result<HashMap<String, String>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("header '{}' is not in key=value form", pair))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("header '{}' has an empty key", pair));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
