use serde::Deserialize;

use fangspiel_core::challenge::{Challenge, default_challenges, default_targets};

/// Top-level server configuration, loaded from `fangspiel.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub game: GameFileConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            game: GameFileConfig::default(),
        }
    }
}

/// Game rules section of the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameFileConfig {
    /// Coin balance granted at registration.
    pub starting_coins: u64,
    /// Freeze window after rejecting a challenge, in seconds.
    pub freeze_secs: u64,
    /// Target locations handed out to players.
    pub targets: Vec<String>,
    /// Challenges players can draw.
    pub challenges: Vec<Challenge>,
}

impl Default for GameFileConfig {
    fn default() -> Self {
        Self {
            starting_coins: 100,
            freeze_secs: 900,
            targets: default_targets(),
            challenges: default_challenges(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration, exiting on unusable values.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if self.game.targets.is_empty() {
            tracing::error!("game.targets must not be empty");
            std::process::exit(1);
        }
        if self.game.challenges.is_empty() {
            tracing::error!("game.challenges must not be empty");
            std::process::exit(1);
        }
        if self.game.challenges.iter().any(|c| c.reward == 0) {
            tracing::error!("game.challenges rewards must be > 0");
            std::process::exit(1);
        }
        if self.game.freeze_secs == 0 {
            tracing::error!("game.freeze_secs must be > 0");
            std::process::exit(1);
        }
    }

    /// Load config from `fangspiel.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("fangspiel.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from fangspiel.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse fangspiel.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No fangspiel.toml found, using defaults");
                ServerConfig::default()
            },
        };

        // Environment variable overrides
        if let Ok(addr) = std::env::var("FANGSPIEL_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(val) = std::env::var("FANGSPIEL_STARTING_COINS")
            && let Ok(n) = val.parse::<u64>()
        {
            config.game.starting_coins = n;
        }
        if let Ok(val) = std::env::var("FANGSPIEL_FREEZE_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            config.game.freeze_secs = n;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
        assert_eq!(cfg.game.starting_coins, 100);
        assert_eq!(cfg.game.freeze_secs, 900);
        assert_eq!(cfg.game.targets.len(), 3);
        assert_eq!(cfg.game.challenges.len(), 3);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
listen_addr = "127.0.0.1:9090"
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9090");
        // Missing [game] section falls back to the built-in catalogs
        assert_eq!(cfg.game.starting_coins, 100);
        assert_eq!(cfg.game.targets, default_targets());
    }

    #[test]
    fn parse_game_toml() {
        let toml_str = r#"
listen_addr = "0.0.0.0:3000"

[game]
starting_coins = 250
freeze_secs = 60
targets = ["Kiosk", "Brunnen"]
challenges = [
    { text = "Pfeife ein Lied", reward = 5 },
]
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.game.starting_coins, 250);
        assert_eq!(cfg.game.freeze_secs, 60);
        assert_eq!(cfg.game.targets.len(), 2);
        assert_eq!(cfg.game.challenges.len(), 1);
        assert_eq!(cfg.game.challenges[0].reward, 5);
    }

    #[test]
    fn validate_accepts_default_config() {
        // Default config passes validation without exiting
        let cfg = ServerConfig::default();
        cfg.validate();
    }

    #[test]
    fn validate_rejects_invalid_addr() {
        let cfg = ServerConfig {
            listen_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        // validate() calls process::exit, so we test the underlying check
        assert!(cfg.listen_addr.parse::<std::net::SocketAddr>().is_err());
    }

    #[test]
    fn validate_rejects_zero_reward() {
        let toml_str = r#"
[game]
challenges = [{ text = "Gratisaufgabe", reward = 0 }]
"#;
        let cfg: ServerConfig = toml::from_str(toml_str).unwrap();
        // validate() calls process::exit, so we test the underlying condition
        assert!(cfg.game.challenges.iter().any(|c| c.reward == 0));
    }
}
