//! Route definitions for the `/community` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Routes mounted at `/community`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route("/posts/{id}/like", post(community::like_post))
}
