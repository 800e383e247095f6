use std::sync::Arc;

use eco_core::catalog::Catalog;
use eco_db::repositories::ProfileStore;
use eco_genai::TextGenerator;

use crate::community::CommunityBoard;
use crate::config::ServerConfig;
use crate::progress::ProgressService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (sessions and direct profile reads).
    pub pool: eco_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The read-only content catalog.
    pub catalog: Arc<Catalog>,
    /// Profile store (reads; mutations go through `progress`).
    pub store: Arc<dyn ProfileStore>,
    /// Single-writer progress mutation service.
    pub progress: ProgressService,
    /// Hosted generation endpoint backend for the AI flows.
    pub generator: Arc<dyn TextGenerator>,
    /// In-memory community board (session-lifetime posts and likes).
    pub community: Arc<CommunityBoard>,
}
