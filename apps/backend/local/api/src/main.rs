#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axum::{Router, routing::get};
use medica_api::{construct_router, state::State};
use medica_vision::{LabelCatalog, ModelHandle, Pipeline};
use std::sync::Arc;

mod config;
mod metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    metrics::init_telemetry();

    tracing::info!("Starting Medicinal Plant Classifier API");

    let config = config::Config::from_env()?;
    tracing::info!(
        "Loaded configuration: model={}, status_policy={:?}",
        config.model_path.display(),
        config.status_policy()
    );

    let model_path = config.model_path.clone();
    let model = tokio::task::spawn_blocking(move || ModelHandle::load_onnx(model_path)).await?;
    if !model.is_loaded() {
        tracing::warn!("Serving without a model; every prediction will fail until restart");
    }

    let pipeline = Pipeline::new(model, LabelCatalog::plants());
    let state = Arc::new(
        State::new(pipeline)
            .with_status_policy(config.status_policy())
            .with_body_limit(config.body_limit),
    );

    let app = construct_router(state);
    let metrics_app = Router::new().route("/metrics", get(metrics::handler));

    let addr = config.addr();
    let metrics_addr = config.metrics_addr();

    tracing::info!("API listening on {}", addr);
    tracing::info!("Metrics listening on {}", metrics_addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr).await?;

    tokio::select! {
        res = axum::serve(listener, app) => res?,
        res = axum::serve(metrics_listener, metrics_app) => res?,
    }

    Ok(())
}
