//! Handlers for progress mutations: quiz answers, challenge submissions,
//! and reward redemptions.
//!
//! These handlers grade and validate against the catalog, then push every
//! state change through the progress service so mutations stay serialized
//! and confirmed against the store.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use eco_core::progress::{grade_chapter_quiz, QuizOutcome};
use eco_core::seed::{FIRST_CHALLENGE_BADGE_ID, FIRST_LESSON_BADGE_ID};
use eco_db::models::{Profile, ProfileResponse};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /lessons/{id}/chapters/{chapter_id}/answer`.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Zero-based index of the chosen option.
    pub answer_index: usize,
}

/// Request body for `POST /progress/badges`.
#[derive(Debug, Deserialize)]
pub struct AwardBadgeRequest {
    pub badge_id: String,
}

/// Response for a graded quiz answer: the outcome plus the profile as
/// persisted after any awards.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub outcome: QuizOutcome,
    /// Badges earned by this answer (empty for most answers).
    pub new_badges: Vec<String>,
    pub profile: ProfileResponse,
}

/// Response for a challenge submission.
#[derive(Debug, Serialize)]
pub struct ChallengeSubmitResponse {
    pub points_awarded: i64,
    pub new_badges: Vec<String>,
    pub profile: ProfileResponse,
}

/// POST /api/v1/lessons/{id}/chapters/{chapter_id}/answer
///
/// Grade one chapter quiz answer. A correct answer awards the lesson's
/// per-chapter point share; a correct answer on the final chapter also marks
/// the lesson completed and, for the student's first completed lesson, awards
/// the first-lesson badge.
pub async fn submit_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path((lesson_id, chapter_id)): Path<(String, String)>,
    Json(input): Json<AnswerRequest>,
) -> AppResult<Json<DataResponse<AnswerResponse>>> {
    let lesson = state.catalog.lesson(&lesson_id)?;
    let outcome = grade_chapter_quiz(lesson, &chapter_id, input.answer_index)?;

    let profile_id = user.profile_id();
    let mut new_badges = Vec::new();

    let mut profile = current_profile(&state, profile_id).await?;

    if outcome.points_awarded > 0 {
        profile = state
            .progress
            .award_points(profile_id, outcome.points_awarded)
            .await?;
    }

    if outcome.completes_lesson {
        let first_lesson = profile.completed_lessons.is_empty();
        profile = state.progress.complete_lesson(profile_id, &lesson_id).await?;

        if first_lesson && !profile.badges.iter().any(|b| b == FIRST_LESSON_BADGE_ID) {
            profile = state
                .progress
                .award_badge(profile_id, FIRST_LESSON_BADGE_ID)
                .await?;
            new_badges.push(FIRST_LESSON_BADGE_ID.to_string());
        }
    }

    Ok(Json(DataResponse::new(AnswerResponse {
        outcome,
        new_badges,
        profile: profile.into(),
    })))
}

/// POST /api/v1/challenges/{id}/submit
///
/// Record a completed real-world challenge: award the challenge's points and
/// the first-challenge badge (idempotent, so repeat submissions only add
/// points).
pub async fn submit_challenge(
    State(state): State<AppState>,
    user: AuthUser,
    Path(challenge_id): Path<String>,
) -> AppResult<Json<DataResponse<ChallengeSubmitResponse>>> {
    let challenge = state.catalog.challenge(&challenge_id)?;
    let profile_id = user.profile_id();

    let before = current_profile(&state, profile_id).await?;
    let had_badge = before.badges.iter().any(|b| b == FIRST_CHALLENGE_BADGE_ID);

    state
        .progress
        .award_points(profile_id, challenge.eco_points)
        .await?;
    let profile = state
        .progress
        .award_badge(profile_id, FIRST_CHALLENGE_BADGE_ID)
        .await?;

    let new_badges = if had_badge {
        vec![]
    } else {
        vec![FIRST_CHALLENGE_BADGE_ID.to_string()]
    };

    Ok(Json(DataResponse::new(ChallengeSubmitResponse {
        points_awarded: challenge.eco_points,
        new_badges,
        profile: profile.into(),
    })))
}

/// POST /api/v1/progress/badges
///
/// Award a catalog badge to the caller. Unknown badge ids are rejected with
/// 404; awarding a badge the profile already holds is a no-op.
pub async fn award_badge(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AwardBadgeRequest>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let badge = state.catalog.badge(&input.badge_id)?;
    let profile = state
        .progress
        .award_badge(user.profile_id(), &badge.id)
        .await?;
    Ok(Json(DataResponse::new(profile.into())))
}

/// POST /api/v1/rewards/{id}/redeem
///
/// Deduct the reward's cost from the profile's balance. Rejected with
/// `INSUFFICIENT_BALANCE` when the balance would go negative; the balance is
/// untouched in that case.
pub async fn redeem_reward(
    State(state): State<AppState>,
    user: AuthUser,
    Path(reward_id): Path<String>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let reward = state.catalog.reward(&reward_id)?;
    let profile = state.progress.redeem(user.profile_id(), reward.cost).await?;
    Ok(Json(DataResponse::new(profile.into())))
}

/// Load the caller's current profile row, failing when it no longer exists.
async fn current_profile(state: &AppState, profile_id: i64) -> AppResult<Profile> {
    state
        .store
        .fetch(profile_id)
        .await?
        .ok_or_else(|| AppError::Store(eco_db::repositories::StoreError::ProfileNotFound(profile_id)))
}
