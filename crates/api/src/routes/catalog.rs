//! Route definitions for the read-only catalog resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, mounted directly under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(catalog::list_lessons))
        .route("/lessons/{id}", get(catalog::get_lesson))
        .route(
            "/lessons/{id}/chapters/{chapter_id}",
            get(catalog::get_chapter),
        )
        .route("/badges", get(catalog::list_badges))
        .route("/challenges", get(catalog::list_challenges))
        .route("/challenges/{id}", get(catalog::get_challenge))
        .route("/rewards", get(catalog::list_rewards))
        .route("/leaderboard", get(catalog::get_leaderboard))
}
