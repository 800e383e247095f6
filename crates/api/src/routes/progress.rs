//! Route definitions for progress mutations (quiz answers, challenge
//! submissions, reward redemptions).

use axum::routing::post;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes, mounted directly under `/api/v1`. All require auth.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/lessons/{id}/chapters/{chapter_id}/answer",
            post(progress::submit_answer),
        )
        .route("/progress/badges", post(progress::award_badge))
        .route("/challenges/{id}/submit", post(progress::submit_challenge))
        .route("/rewards/{id}/redeem", post(progress::redeem_reward))
}
