//! HTTP service: liveness, game redirect, and the game-send trigger route.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Config;
use crate::telegram::GameSender;

pub const LIVENESS_TEXT: &str = "Telegram Game Backend is running!";

/// Shared handler state: the immutable configuration plus the optional game
/// sender. `sender` is `Some` only when the bot authenticated and a game
/// short name is configured.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sender: Option<Arc<dyn GameSender>>,
}

/// Builds the router. Without a sender, `/api/send-game` is not registered
/// and resolves to the router's 404 fallback.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", any(liveness))
        .route("/game", any(game_redirect));

    if state.sender.is_some() {
        router = router.route("/api/send-game", post(send_game));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

/// axum's `Redirect` helpers emit 303/307/308 only; the contract here is a
/// plain 302 with the configured game URL.
async fn game_redirect(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.game_url.clone())],
    )
}

#[derive(Debug, Deserialize)]
struct SendGameParams {
    chat_id: Option<String>,
}

/// Triggers a game send to the chat named by `chat_id`. Unauthenticated by
/// observed design; see DESIGN.md.
async fn send_game(
    State(state): State<AppState>,
    Query(params): Query<SendGameParams>,
) -> Response {
    let Some(raw) = params.chat_id else {
        return (StatusCode::BAD_REQUEST, "missing chat_id query parameter").into_response();
    };
    let chat_id: i64 = match raw.parse() {
        Ok(id) => id,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "chat_id must be a 64-bit integer").into_response();
        }
    };

    // The route is only registered with a sender; keep the absent-route answer
    // if that invariant ever breaks.
    let Some(sender) = &state.sender else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match sender.send_game(chat_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({"success": true}))).into_response(),
        Err(e) => {
            error!(error = %e, chat_id, "Failed to send game");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to send game").into_response()
        }
    }
}
