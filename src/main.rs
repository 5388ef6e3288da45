use bee_api::api::{self, AppState};
use bee_api::config::ServiceConfig;
use bee_api::lifecycle::{build_tracer_provider, service_tracer, setup_tracing, shutdown_tracer_provider, BeeSystem};
use clap::Parser;
use opentelemetry_sdk::trace::Tracer;
use tokio::net::TcpListener;
use tracing::{info, warn};

// The tracer provider is built and shut down outside the runtime: the blocking
// OTLP client must not be dropped from async context.
fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    setup_tracing();

    let provider = if config.traced {
        Some(build_tracer_provider(&config)?)
    } else {
        None
    };
    let tracer = provider.as_ref().map(service_tracer);

    let runtime = tokio::runtime::Runtime::new()?;
    let served = runtime.block_on(serve(config, tracer));
    drop(runtime);

    if let Some(provider) = provider {
        shutdown_tracer_provider(provider)?;
    }
    served
}

async fn serve(config: ServiceConfig, tracer: Option<Tracer>) -> anyhow::Result<()> {
    let system = BeeSystem::new();
    let app = api::router(AppState::new(system.bee_client.clone(), tracer));

    let listener = TcpListener::bind(config.listen).await?;
    info!(addr = %listener.local_addr()?, traced = config.traced, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
    }
}
