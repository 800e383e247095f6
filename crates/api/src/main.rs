use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eco_api::config::ServerConfig;
use eco_api::community::CommunityBoard;
use eco_api::progress::ProgressService;
use eco_api::router::build_app_router;
use eco_api::state::AppState;
use eco_db::repositories::PgProfileStore;
use eco_genai::GeminiClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eco_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = eco_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    eco_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    eco_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Catalog ---
    let catalog = Arc::new(eco_core::seed::catalog());
    tracing::info!(
        lessons = catalog.lessons().len(),
        challenges = catalog.challenges().len(),
        rewards = catalog.rewards().len(),
        "Content catalog loaded"
    );

    // --- Profile store + progress service ---
    let store: Arc<dyn eco_db::repositories::ProfileStore> =
        Arc::new(PgProfileStore::new(pool.clone()));
    let progress = ProgressService::start(Arc::clone(&store));
    tracing::info!("Progress service started");

    // --- Generation endpoint client ---
    let generator: Arc<dyn eco_genai::TextGenerator> = Arc::new(GeminiClient::new(
        config.genai.api_key.clone(),
        config.genai.model.clone(),
    ));
    tracing::info!(model = %config.genai.model, "Generation client configured");

    // --- Community board ---
    let community = Arc::new(CommunityBoard::new(catalog.seed_posts()));

    // --- App state + router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
        store,
        progress,
        generator,
        community,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
