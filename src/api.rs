use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::OracleError;
use crate::services::dashboard::{live_feed, DashboardSnapshot};
use crate::services::oracle::{AnalysisSkip, Oracle};

pub struct AppState {
    pub oracle: Oracle,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(get_dashboard))
        .route("/events", get(get_events))
        .route("/counsel", get(get_counsel))
        .route("/analyze", post(analyze))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>, bind_addr: &str) -> Result<(), OracleError> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("🌐 [API] Server listening on {}", bind_addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| OracleError::Server(e.to_string()))
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DashboardSnapshot::build(&state.oracle.snapshot()))
}

async fn get_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(live_feed(&state.oracle.events()))
}

async fn get_counsel(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.oracle.counsel() {
        Some(counsel) => Json(counsel).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "no_counsel"})),
        )
            .into_response(),
    }
}

async fn analyze(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.oracle.request_analysis().await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(AnalysisSkip::InFlight) => (
            StatusCode::CONFLICT,
            Json(json!({"status": "in_flight"})),
        )
            .into_response(),
        Err(AnalysisSkip::EmptyWindow) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"status": "no_events"})),
        )
            .into_response(),
    }
}
