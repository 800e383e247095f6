//! Integration tests for the authenticated profile endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, signup};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_returns_current_state(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let (token, id) = signup(app.clone(), "me@test.com", "Me").await;

    let response = get_auth(app, "/api/v1/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["email"], "me@test.com");
    assert_eq!(json["data"]["eco_points"], 0);
    assert!(json["data"].get("password_hash").is_none());
}

/// A valid token whose profile row has vanished gets a fresh zeroed profile
/// instead of an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_profile_row_is_recreated(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let (token, id) = signup(app.clone(), "ghost@test.com", "Ghost").await;

    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .expect("delete should succeed");

    let response = get_auth(app, "/api/v1/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "ghost@test.com");
    assert_eq!(json["data"]["eco_points"], 0);
    assert_eq!(json["data"]["completed_lessons"], serde_json::json!([]));
}
