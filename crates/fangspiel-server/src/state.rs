use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::registry::PlayerRegistry;

pub type SharedRegistry = Arc<RwLock<PlayerRegistry>>;

/// Shared application state handed to every request handler.
///
/// The registry sits behind a single `RwLock`; each mutating handler holds
/// the write lock for exactly one registry operation, so read-modify-write
/// sequences on a player record can never interleave.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = PlayerRegistry::from_game_config(&config.game);
        Self {
            registry: Arc::new(RwLock::new(registry)),
            config: Arc::new(config),
        }
    }
}
