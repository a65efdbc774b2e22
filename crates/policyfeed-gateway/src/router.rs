//! Axum router wiring.
//!
//! Every route sits behind a permissive CORS layer: any origin, method, and
//! header; preflight requests are answered by the layer itself.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/policies", get(api::policies::list_policies))
        .route("/api/policies/:id", get(api::policies::get_policy))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
