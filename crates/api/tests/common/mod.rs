//! Shared test harness: builds the production router against a
//! `#[sqlx::test]` pool, with a stubbed generation backend.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use eco_api::auth::jwt::JwtConfig;
use eco_api::community::CommunityBoard;
use eco_api::config::{GenAiConfig, ServerConfig};
use eco_api::progress::ProgressService;
use eco_api::router::build_app_router;
use eco_api::state::AppState;
use eco_db::repositories::{PgProfileStore, ProfileStore};
use eco_genai::{GenAiError, GenerateRequest, GenerateResponse, TextGenerator};

/// Stub generation backend that echoes a fixed reply, so AI endpoints can be
/// exercised without network access. JSON-mode requests get a payload that
/// parses for every structured flow used in tests.
pub struct StubGenerator {
    pub reply: String,
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self {
            reply: "stub reply".to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _request: GenerateRequest) -> Result<GenerateResponse, GenAiError> {
        Ok(GenerateResponse {
            text: self.reply.clone(),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        genai: GenAiConfig {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        },
    }
}

/// Build the full application router with the production middleware stack,
/// using the given pool and a default stub generator.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_generator(pool, StubGenerator::default()).await
}

/// Like [`build_test_app`] but with a caller-supplied generation stub.
pub async fn build_test_app_with_generator(pool: PgPool, generator: StubGenerator) -> Router {
    let config = test_config();

    let catalog = Arc::new(eco_core::seed::catalog());
    let store: Arc<dyn ProfileStore> = Arc::new(PgProfileStore::new(pool.clone()));
    let progress = ProgressService::start(Arc::clone(&store));
    let community = Arc::new(CommunityBoard::new(catalog.seed_posts()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
        store,
        progress,
        generator: Arc::new(generator),
        community,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Send an authenticated POST request with a JSON body.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Sign up a fresh account via the API and return `(access_token, profile_id)`.
pub async fn signup(app: Router, email: &str, name: &str) -> (String, i64) {
    let body = serde_json::json!({
        "email": email,
        "display_name": name,
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let token = json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string();
    let id = json["profile"]["id"].as_i64().expect("profile id");
    (token, id)
}
