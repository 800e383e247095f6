pub mod ai;
pub mod auth;
pub mod catalog;
pub mod community;
pub mod health;
pub mod progress;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                    signup (public)
/// /auth/login                                     login (public)
/// /auth/refresh                                   refresh (public)
/// /auth/logout                                    logout (requires auth)
///
/// /profile                                        authenticated profile (GET)
///
/// /lessons                                        list lessons
/// /lessons/{id}                                   lesson detail
/// /lessons/{id}/chapters/{chapter_id}             chapter detail
/// /lessons/{id}/chapters/{chapter_id}/answer      grade quiz answer (POST, auth)
/// /badges                                         list badges
/// /progress/badges                                award a badge (POST, auth)
/// /challenges                                     list challenges
/// /challenges/{id}                                challenge detail
/// /challenges/{id}/submit                         submit challenge (POST, auth)
/// /rewards                                        list rewards
/// /rewards/{id}/redeem                            redeem reward (POST, auth)
/// /leaderboard                                    static standings
///
/// /community/posts                                list, create (POST requires auth)
/// /community/posts/{id}/like                      like a post (POST, auth)
///
/// /ai/advisor/analyze                             photo analysis (POST, auth)
/// /ai/advisor/chat                                advisor chat (POST, auth)
/// /ai/assistant/chat                              EcoBuddy chat (POST, auth)
/// /ai/lessons/generate                            lesson generation (POST, auth)
/// /ai/suggestions                                 lesson suggestions (POST, auth)
/// /ai/summarize                                   summarization (POST, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/profile", get(handlers::profile::get_profile))
        .merge(catalog::router())
        .merge(progress::router())
        .nest("/community", community::router())
        .nest("/ai", ai::router())
}
