use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use service_logging::{service_debug, service_info};
use summarizer_core::Summarizer;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{ApiError, SummaryRequest, SummaryResponse};

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct ServiceState {
    summarizer: Summarizer,
    default_max_length: usize,
}

impl ServiceState {
    pub fn new(summarizer: Summarizer, default_max_length: usize) -> Self {
        Self {
            summarizer,
            default_max_length,
        }
    }
}

pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: ServiceState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        service_info!("listening on {}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        service_info!("shutdown requested");
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn summarize(
    State(state): State<ServiceState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;
    let max_length = request.resolved_max_length(state.default_max_length)?;
    service_debug!(
        "summarize request: {} chars, url {:?}, max_length {:?}",
        request.content.chars().count(),
        request.url,
        max_length
    );

    let summarizer = state.summarizer.clone();
    let summary = tokio::task::spawn_blocking(move || {
        summarizer.summarize(&request.content, max_length)
    })
    .await
    .map_err(|err| ApiError::Internal(format!("summarizer task failed: {err}")))??;

    Ok(Json(summary.into()))
}
