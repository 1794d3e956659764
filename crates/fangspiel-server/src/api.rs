use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use fangspiel_core::challenge::Challenge;
use fangspiel_core::time;

use crate::error::GameError;
use crate::state::AppState;

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub coins: u64,
    pub target: String,
}

/// Response carrying an updated coin balance (spend, accept).
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub new_coins: u64,
}

/// Response for a balance query.
#[derive(Debug, Serialize)]
pub struct CoinsResponse {
    pub coins: u64,
}

/// Response carrying a freshly assigned target.
#[derive(Debug, Serialize)]
pub struct TargetResponse {
    pub new_target: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /register/{id} — create a player and hand out the starting state.
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegisterResponse>, GameError> {
    let mut registry = state.registry.write().await;
    let player = registry.register(&id)?;
    Ok(Json(RegisterResponse {
        message: "Registrierung erfolgreich!".to_string(),
        coins: player.coins,
        target: player.target.clone(),
    }))
}

/// POST /spend_money/{id}/{amount} — deduct coins from the balance.
pub async fn spend_money(
    State(state): State<AppState>,
    Path((id, amount)): Path<(String, u64)>,
) -> Result<Json<BalanceResponse>, GameError> {
    let mut registry = state.registry.write().await;
    let new_coins = registry.spend(&id, amount)?;
    Ok(Json(BalanceResponse { new_coins }))
}

/// GET /get_coins/{id} — current balance.
pub async fn get_coins(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CoinsResponse>, GameError> {
    let registry = state.registry.read().await;
    let coins = registry.coins(&id)?;
    Ok(Json(CoinsResponse { coins }))
}

/// POST /reached_target/{id} — swap the reached target for a new one.
pub async fn reached_target(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TargetResponse>, GameError> {
    let mut registry = state.registry.write().await;
    let new_target = registry.reach_target(&id)?;
    Ok(Json(TargetResponse { new_target }))
}

/// POST /caught/{id} — reassign the target after the player was caught.
pub async fn caught(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TargetResponse>, GameError> {
    let mut registry = state.registry.write().await;
    let new_target = registry.mark_caught(&id)?;
    Ok(Json(TargetResponse { new_target }))
}

/// POST /draw_challenge/{id} — draw a random challenge, unless frozen.
pub async fn draw_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Challenge>, GameError> {
    let mut registry = state.registry.write().await;
    let challenge = registry.draw_challenge(&id, time::epoch_secs())?;
    Ok(Json(challenge))
}

/// POST /accept_challenge/{id} — collect the pending challenge's reward.
pub async fn accept_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BalanceResponse>, GameError> {
    let mut registry = state.registry.write().await;
    let new_coins = registry.accept_challenge(&id)?;
    Ok(Json(BalanceResponse { new_coins }))
}

/// POST /reject_challenge/{id} — discard the pending challenge and freeze.
pub async fn reject_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, GameError> {
    let minutes = state.config.game.freeze_secs / 60;
    let mut registry = state.registry.write().await;
    registry.reject_challenge(&id, time::epoch_secs())?;
    Ok(Json(MessageResponse {
        message: format!("Eingefroren für {minutes} Minuten!"),
    }))
}
