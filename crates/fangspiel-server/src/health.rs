use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub players: usize,
}

/// Health check endpoint. Returns server status and the number of
/// registered players as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let players = {
        let registry = state.registry.read().await;
        registry.player_count()
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        players,
    })
}
