//! Integration tests for the read-only catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_lessons(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/lessons").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lessons = json["data"].as_array().expect("lessons array");
    assert_eq!(lessons.len(), 3);
    assert_eq!(lessons[0]["id"], "1");
    assert_eq!(lessons[0]["eco_points"], 80);
    assert_eq!(lessons[0]["chapters"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_lesson_detail_and_missing(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/v1/lessons/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Renewable Energy Sources");

    let response = get(app, "/api/v1/lessons/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_chapter_detail_and_missing(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/v1/lessons/1/chapters/1-2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "1-2");
    assert_eq!(json["data"]["question"]["options"].as_array().unwrap().len(), 4);

    let response = get(app.clone(), "/api/v1/lessons/1/chapters/9-9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    // Unknown lesson is also a 404, even with a plausible chapter id.
    let response = get(app, "/api/v1/lessons/99/chapters/1-1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_challenge_detail_and_missing(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/v1/challenges/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "DIY Compost Bin");
    assert_eq!(json["data"]["eco_points"], 120);

    let response = get(app, "/api/v1/challenges/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_badges_challenges_rewards(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/v1/badges").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);

    let response = get(app.clone(), "/api/v1/challenges").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let response = get(app, "/api/v1/rewards").await;
    let json = body_json(response).await;
    let rewards = json["data"].as_array().unwrap();
    assert_eq!(rewards.len(), 4);
    assert_eq!(rewards[0]["cost"], 150);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_leaderboard_is_static_and_ranked(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().expect("leaderboard array");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["rank"], 1);
}
