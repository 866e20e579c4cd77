use std::sync::Arc;

use anyhow::Context;
use log::{info, warn};
use tokio::{net::TcpListener, signal, task};

use house_price_api::{
    api,
    artifacts::ArtifactBundle,
    config::ServeConfig,
    service::{ModelState, PredictionService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServeConfig::from_env()?;

    let dir = config.model_dir.clone();
    let bundle = task::spawn_blocking(move || ArtifactBundle::load(&dir))
        .await?
        .with_context(|| format!("failed to load the model from {}", config.model_dir.display()))?;

    let state = Arc::new(ModelState::loaded(PredictionService::new(bundle)));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening at {addr}");

    let shutdown_state = Arc::clone(&state);
    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(async move {
            if let Err(e) = signal::ctrl_c().await {
                warn!("failed to listen for the shutdown signal: {e}");
                std::future::pending::<()>().await;
            }
            info!("received SIGTERM, wrapping up...");
            shutdown_state.unload();
        })
        .await?;

    Ok(())
}
