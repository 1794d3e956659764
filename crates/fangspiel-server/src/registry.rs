use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fangspiel_core::challenge::{Challenge, default_challenges, default_targets, pick};
use fangspiel_core::player::PlayerState;

use crate::config::GameFileConfig;
use crate::error::GameError;

/// Default coin balance granted at registration.
const DEFAULT_STARTING_COINS: u64 = 100;

/// Default freeze window after rejecting a challenge, in seconds.
const DEFAULT_FREEZE_SECS: u64 = 900;

/// In-memory player registry.
///
/// Owns every player record together with the game rules, the catalogs, and
/// the randomness source. Created once at server start and never persisted;
/// a registered identifier is never removed.
///
/// Operations that depend on the clock take `now` (epoch seconds) as an
/// explicit argument.
pub struct PlayerRegistry {
    players: HashMap<String, PlayerState>,
    rng: StdRng,
    starting_coins: u64,
    freeze_secs: u64,
    targets: Vec<String>,
    challenges: Vec<Challenge>,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::with_rules(
            DEFAULT_STARTING_COINS,
            DEFAULT_FREEZE_SECS,
            default_targets(),
            default_challenges(),
        )
    }

    /// Create a registry with explicit rules and catalogs.
    ///
    /// # Panics
    ///
    /// Panics on an empty catalog; `ServerConfig::validate` rejects such
    /// configs before a registry is ever built from them.
    pub fn with_rules(
        starting_coins: u64,
        freeze_secs: u64,
        targets: Vec<String>,
        challenges: Vec<Challenge>,
    ) -> Self {
        assert!(!targets.is_empty(), "target catalog must not be empty");
        assert!(!challenges.is_empty(), "challenge catalog must not be empty");
        Self {
            players: HashMap::new(),
            rng: StdRng::from_os_rng(),
            starting_coins,
            freeze_secs,
            targets,
            challenges,
        }
    }

    /// Build a registry from the `[game]` config section.
    pub fn from_game_config(game: &GameFileConfig) -> Self {
        Self::with_rules(
            game.starting_coins,
            game.freeze_secs,
            game.targets.clone(),
            game.challenges.clone(),
        )
    }

    /// Replace the RNG with a seeded one, for deterministic tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Register a new player with the starting balance and a random target.
    pub fn register(&mut self, id: &str) -> Result<&PlayerState, GameError> {
        if self.players.contains_key(id) {
            return Err(GameError::AlreadyRegistered);
        }
        let target = pick(&self.targets, &mut self.rng).clone();
        self.players
            .insert(id.to_string(), PlayerState::new(self.starting_coins, target));
        Ok(&self.players[id])
    }

    /// Look up a player record.
    pub fn lookup(&self, id: &str) -> Result<&PlayerState, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer)
    }

    /// Current coin balance.
    pub fn coins(&self, id: &str) -> Result<u64, GameError> {
        Ok(self.lookup(id)?.coins)
    }

    /// Deduct `amount` from the player's balance and return the new balance.
    /// The balance is checked before the deduction, so it never goes
    /// negative.
    pub fn spend(&mut self, id: &str, amount: u64) -> Result<u64, GameError> {
        let Some(player) = self.players.get_mut(id) else {
            return Err(GameError::UnknownPlayer);
        };
        if player.coins < amount {
            return Err(GameError::InsufficientCoins);
        }
        player.coins -= amount;
        Ok(player.coins)
    }

    /// Hand out a new random target after the player reached the current one.
    pub fn reach_target(&mut self, id: &str) -> Result<String, GameError> {
        self.assign_new_target(id)
    }

    /// Hand out a new random target after the player was caught. Same
    /// transition as `reach_target`; kept separate for the distinct trigger.
    pub fn mark_caught(&mut self, id: &str) -> Result<String, GameError> {
        self.assign_new_target(id)
    }

    fn assign_new_target(&mut self, id: &str) -> Result<String, GameError> {
        let Some(player) = self.players.get_mut(id) else {
            return Err(GameError::UnknownPlayer);
        };
        player.target = pick(&self.targets, &mut self.rng).clone();
        Ok(player.target.clone())
    }

    /// Draw a random challenge, unless the player is still frozen.
    ///
    /// A draw at exactly `freeze_until` succeeds; only `now < freeze_until`
    /// blocks. The drawn challenge stays pending until accepted or rejected.
    pub fn draw_challenge(&mut self, id: &str, now: u64) -> Result<Challenge, GameError> {
        let Some(player) = self.players.get_mut(id) else {
            return Err(GameError::UnknownPlayer);
        };
        if now < player.freeze_until {
            return Err(GameError::Frozen);
        }
        let challenge = pick(&self.challenges, &mut self.rng).clone();
        player.current_challenge = Some(challenge.clone());
        Ok(challenge)
    }

    /// Credit the pending challenge's reward, clear it, and return the new
    /// balance.
    pub fn accept_challenge(&mut self, id: &str) -> Result<u64, GameError> {
        let Some(player) = self.players.get_mut(id) else {
            return Err(GameError::UnknownPlayer);
        };
        let Some(challenge) = player.current_challenge.take() else {
            return Err(GameError::NoActiveChallenge);
        };
        player.coins += challenge.reward;
        Ok(player.coins)
    }

    /// Discard any pending challenge and freeze future draws. Deliberately
    /// permissive: rejecting with nothing pending still arms the freeze
    /// window. Returns the epoch second the freeze expires.
    pub fn reject_challenge(&mut self, id: &str, now: u64) -> Result<u64, GameError> {
        let Some(player) = self.players.get_mut(id) else {
            return Err(GameError::UnknownPlayer);
        };
        player.freeze_until = now + self.freeze_secs;
        player.current_challenge = None;
        Ok(player.freeze_until)
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
