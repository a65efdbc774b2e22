//! Policy handlers.
//!
//! Each request loads through the shared `PolicySource` on the blocking pool,
//! so the async workers never touch the file system directly.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use policyfeed_core::error::{PolicyFeedError, Result};
use policyfeed_core::Loaded;

use crate::api::ApiError;
use crate::app_state::AppState;

const ROUTE_LIST: &str = "list";
const ROUTE_GET: &str = "get";

pub async fn list_policies(State(state): State<AppState>) -> Response {
    let result = list_inner(&state).await;
    finish(&state, ROUTE_LIST, result)
}

pub async fn get_policy(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = get_inner(&state, id).await;
    finish(&state, ROUTE_GET, result)
}

async fn list_inner(state: &AppState) -> Result<(Vec<u8>, usize)> {
    let loaded = load(state).await?;
    let body = serde_json::to_vec(&*loaded.policies)
        .map_err(|e| PolicyFeedError::Internal(format!("serialize policies: {e}")))?;
    Ok((body, loaded.policies.len()))
}

async fn get_inner(state: &AppState, id: String) -> Result<(Vec<u8>, usize)> {
    let loaded = load(state).await?;
    let policy = loaded
        .policies
        .iter()
        .find(|p| p.id == id)
        .ok_or(PolicyFeedError::NotFound(id))?;
    let body = serde_json::to_vec(policy)
        .map_err(|e| PolicyFeedError::Internal(format!("serialize policy: {e}")))?;
    Ok((body, 1))
}

async fn load(state: &AppState) -> Result<Loaded> {
    let source = state.source();
    let started = Instant::now();

    let loaded = tokio::task::spawn_blocking(move || source.load())
        .await
        .map_err(|e| PolicyFeedError::Internal(format!("load task failed: {e}")))??;

    let origin = loaded.origin.as_str();
    let metrics = state.metrics();
    metrics.loads.inc(&[("origin", origin)]);
    metrics.load_duration.observe(&[("origin", origin)], started.elapsed());
    tracing::debug!(origin, rows = loaded.policies.len(), "policies loaded");

    Ok(loaded)
}

fn finish(state: &AppState, route: &'static str, result: Result<(Vec<u8>, usize)>) -> Response {
    let metrics = state.metrics();
    match result {
        Ok((body, rows)) => {
            metrics.requests.inc(&[("route", route), ("code", "OK")]);
            metrics.rows_served.add(&[("route", route)], rows as u64);
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            metrics.requests.inc(&[("route", route), ("code", e.client_code().as_str())]);
            ApiError(e).into_response()
        }
    }
}
