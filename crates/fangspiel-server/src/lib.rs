pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod registry;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let state = AppState::new(config);

    // The frontend is served from a different origin and talks to this
    // API directly, so CORS stays wide open.
    let app = Router::new()
        .route("/register/{id}", axum::routing::post(api::register))
        .route(
            "/spend_money/{id}/{amount}",
            axum::routing::post(api::spend_money),
        )
        .route("/get_coins/{id}", axum::routing::get(api::get_coins))
        .route(
            "/reached_target/{id}",
            axum::routing::post(api::reached_target),
        )
        .route(
            "/draw_challenge/{id}",
            axum::routing::post(api::draw_challenge),
        )
        .route(
            "/accept_challenge/{id}",
            axum::routing::post(api::accept_challenge),
        )
        .route(
            "/reject_challenge/{id}",
            axum::routing::post(api::reject_challenge),
        )
        .route("/caught/{id}", axum::routing::post(api::caught))
        .route("/health", axum::routing::get(health::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
