//! policyfeed gateway
//!
//! - `GET /api/policies` serves the policy CSV as JSON
//! - optional `policyfeed.yaml` in the working directory; defaults otherwise
//! - Ctrl-C starts draining: `/readyz` flips to 503, in-flight requests finish

use tracing_subscriber::{fmt, EnvFilter};

use policyfeed_core::error::{PolicyFeedError, Result};
use policyfeed_gateway::{app_state, config, router};

const CONFIG_PATH: &str = "policyfeed.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "policyfeed-gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(CONFIG_PATH)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(
        %listen,
        csv = %state.source().path().display(),
        cache = state.cfg().data.cache,
        "policyfeed-gateway starting"
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PolicyFeedError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| PolicyFeedError::Internal(format!("server failed: {e}")))?;

    tracing::info!("policyfeed-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: app_state::AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; shutting down");
    }
    state.metrics().set_draining();
    tracing::info!("shutdown requested, draining");
}
