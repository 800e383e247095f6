//! Handlers for the in-memory community board.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use eco_core::catalog::CommunityPost;
use eco_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /community/posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// GET /api/v1/community/posts
pub async fn list_posts(State(state): State<AppState>) -> Json<DataResponse<Vec<CommunityPost>>> {
    Json(DataResponse::new(state.community.list()))
}

/// POST /api/v1/community/posts
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CommunityPost>>)> {
    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Post content must not be empty".into(),
        )));
    }

    let avatar_url = crate::handlers::auth::default_avatar_url(&user.claims.email);
    let post = state.community.create(
        &user.claims.name,
        &avatar_url,
        input.title.trim(),
        input.content.trim(),
    );
    Ok((StatusCode::CREATED, Json(DataResponse::new(post))))
}

/// POST /api/v1/community/posts/{id}/like
pub async fn like_post(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<CommunityPost>>> {
    let post = state
        .community
        .like(&id)
        .ok_or_else(|| AppError::Core(CoreError::not_found("post", &id)))?;
    Ok(Json(DataResponse::new(post)))
}
