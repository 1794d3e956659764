use rand::Rng;
use serde::{Deserialize, Serialize};

/// A physical task a player can draw, rewarded with coins on acceptance.
///
/// Serialized both as the `draw_challenge` response body and as a config
/// catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub text: String,
    pub reward: u64,
}

/// Built-in challenge catalog.
pub fn default_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            text: "Mach 10 Liegestütze".to_string(),
            reward: 20,
        },
        Challenge {
            text: "Springe 3x hoch".to_string(),
            reward: 10,
        },
        Challenge {
            text: "Singe laut im Park".to_string(),
            reward: 15,
        },
    ]
}

/// Built-in target locations.
pub fn default_targets() -> Vec<String> {
    vec![
        "🏞️ Spielplatz".to_string(),
        "🛒 Supermarkt".to_string(),
        "🚏 Bushaltestelle".to_string(),
    ]
}

/// Uniform choice from a catalog. Repeats are allowed and the catalog is
/// never consumed.
///
/// # Panics
///
/// Panics if the catalog is empty.
pub fn pick<'a, T>(catalog: &'a [T], rng: &mut impl Rng) -> &'a T {
    &catalog[rng.random_range(0..catalog.len())]
}
