//! Route definitions for the `/ai` prompt-flow resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`. All require auth.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advisor/analyze", post(ai::advisor_analyze))
        .route("/advisor/chat", post(ai::advisor_chat))
        .route("/assistant/chat", post(ai::assistant_chat))
        .route("/lessons/generate", post(ai::generate_lesson))
        .route("/suggestions", post(ai::lesson_suggestions))
        .route("/summarize", post(ai::summarize_text))
}
