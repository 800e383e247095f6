//! Handlers for the read-only content catalog.

use axum::extract::{Path, State};
use axum::Json;

use eco_core::catalog::{Badge, Challenge, Chapter, LeaderboardEntry, Lesson, Reward};
use eco_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/lessons
pub async fn list_lessons(State(state): State<AppState>) -> Json<DataResponse<Vec<Lesson>>> {
    Json(DataResponse::new(state.catalog.lessons().to_vec()))
}

/// GET /api/v1/lessons/{id}
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Lesson>>> {
    let lesson = state.catalog.lesson(&id)?;
    Ok(Json(DataResponse::new(lesson.clone())))
}

/// GET /api/v1/lessons/{id}/chapters/{chapter_id}
pub async fn get_chapter(
    State(state): State<AppState>,
    Path((lesson_id, chapter_id)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Chapter>>> {
    let lesson = state.catalog.lesson(&lesson_id)?;
    let chapter = lesson
        .chapter(&chapter_id)
        .ok_or_else(|| CoreError::not_found("chapter", &chapter_id))?;
    Ok(Json(DataResponse::new(chapter.clone())))
}

/// GET /api/v1/badges
pub async fn list_badges(State(state): State<AppState>) -> Json<DataResponse<Vec<Badge>>> {
    Json(DataResponse::new(state.catalog.badges().to_vec()))
}

/// GET /api/v1/challenges
pub async fn list_challenges(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Challenge>>> {
    Json(DataResponse::new(state.catalog.challenges().to_vec()))
}

/// GET /api/v1/challenges/{id}
pub async fn get_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Challenge>>> {
    let challenge = state.catalog.challenge(&id)?;
    Ok(Json(DataResponse::new(challenge.clone())))
}

/// GET /api/v1/rewards
pub async fn list_rewards(State(state): State<AppState>) -> Json<DataResponse<Vec<Reward>>> {
    Json(DataResponse::new(state.catalog.rewards().to_vec()))
}

/// GET /api/v1/leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<LeaderboardEntry>>> {
    Json(DataResponse::new(state.catalog.leaderboard().to_vec()))
}
