//! Handlers for the AI prompt flows.
//!
//! Each handler validates its input, delegates to the matching flow in
//! `eco_genai::flows`, and wraps the result in the standard envelope.
//! Chat transcripts are caller-owned: clients resend history each turn.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use eco_core::error::CoreError;
use eco_genai::flows::advisor::AdvisorAnalysis;
use eco_genai::flows::lesson::GeneratedLesson;
use eco_genai::flows::suggest::{AvailableLesson, QuizResult, SuggestedLesson};
use eco_genai::flows::{advisor, assistant, lesson, suggest, summarize, ChatTurn};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /ai/advisor/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64 `data:` URI of the uploaded photo.
    pub photo_data_uri: String,
}

/// Request body for `POST /ai/advisor/chat`.
#[derive(Debug, Deserialize)]
pub struct AdvisorChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Request body for `POST /ai/assistant/chat`.
#[derive(Debug, Deserialize)]
pub struct AssistantChatRequest {
    pub message: String,
    /// Optional base64 `data:` URI of an attached photo.
    pub image_data_uri: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Request body for `POST /ai/lessons/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateLessonRequest {
    pub topic: String,
}

/// Request body for `POST /ai/suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub quiz_results: Vec<QuizResult>,
}

/// Request body for `POST /ai/summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// Free-text chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Summarization reply.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/ai/advisor/analyze
pub async fn advisor_analyze(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<DataResponse<AdvisorAnalysis>>> {
    if input.photo_data_uri.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A photo data URI is required".into(),
        )));
    }
    let analysis = advisor::analyze_image(state.generator.as_ref(), &input.photo_data_uri).await?;
    Ok(Json(DataResponse::new(analysis)))
}

/// POST /api/v1/ai/advisor/chat
pub async fn advisor_chat(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<AdvisorChatRequest>,
) -> AppResult<Json<DataResponse<ChatResponse>>> {
    require_message(&input.message)?;
    let reply = advisor::chat(state.generator.as_ref(), &input.message, &input.history).await?;
    Ok(Json(DataResponse::new(ChatResponse { reply })))
}

/// POST /api/v1/ai/assistant/chat
///
/// Unified EcoBuddy chat: advisor, image analysis, and teacher assistant in
/// one conversation.
pub async fn assistant_chat(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<AssistantChatRequest>,
) -> AppResult<Json<DataResponse<ChatResponse>>> {
    require_message(&input.message)?;
    let reply = assistant::chat(
        state.generator.as_ref(),
        &input.message,
        input.image_data_uri.as_deref(),
        &input.history,
    )
    .await?;
    Ok(Json(DataResponse::new(ChatResponse { reply })))
}

/// POST /api/v1/ai/lessons/generate
pub async fn generate_lesson(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<GenerateLessonRequest>,
) -> AppResult<Json<DataResponse<GeneratedLesson>>> {
    let topic = input.topic.trim();
    if topic.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A lesson topic is required".into(),
        )));
    }
    let generated = lesson::generate(state.generator.as_ref(), topic).await?;
    Ok(Json(DataResponse::new(generated)))
}

/// POST /api/v1/ai/suggestions
///
/// Rank catalog lessons for the student based on submitted quiz results.
/// The available-lesson list always comes from the server-side catalog.
pub async fn lesson_suggestions(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<SuggestionsRequest>,
) -> AppResult<Json<DataResponse<Vec<SuggestedLesson>>>> {
    let available: Vec<AvailableLesson> = state
        .catalog
        .lessons()
        .iter()
        .map(|l| AvailableLesson {
            id: l.id.clone(),
            title: l.title.clone(),
            description: l.description.clone(),
        })
        .collect();

    let suggestions =
        suggest::suggest(state.generator.as_ref(), &input.quiz_results, &available).await?;
    Ok(Json(DataResponse::new(suggestions)))
}

/// POST /api/v1/ai/summarize
pub async fn summarize_text(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<SummarizeRequest>,
) -> AppResult<Json<DataResponse<SummaryResponse>>> {
    if input.text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Text to summarize is required".into(),
        )));
    }
    let summary = summarize::summarize(state.generator.as_ref(), &input.text).await?;
    Ok(Json(DataResponse::new(SummaryResponse { summary })))
}

fn require_message(message: &str) -> AppResult<()> {
    if message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A message is required".into(),
        )));
    }
    Ok(())
}
