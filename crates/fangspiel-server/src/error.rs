use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failures, surfaced verbatim to the client.
///
/// Every variant becomes an HTTP 400 with the message under `detail`. All of
/// them are request-local and non-fatal; the client displays the message and
/// leaves its mirrored state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    UnknownPlayer,
    AlreadyRegistered,
    InsufficientCoins,
    Frozen,
    NoActiveChallenge,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::UnknownPlayer => "Spieler nicht gefunden!",
            Self::AlreadyRegistered => "Spieler existiert bereits!",
            Self::InsufficientCoins => "Nicht genug Coins!",
            Self::Frozen => "Du bist noch eingefroren!",
            Self::NoActiveChallenge => "Keine aktive Challenge!",
        };
        write!(f, "{msg}")
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
