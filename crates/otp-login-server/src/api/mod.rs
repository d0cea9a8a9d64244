//! HTTP API for the login backend.

mod handlers;
mod types;

pub use handlers::*;
pub use types::*;

use crate::registry::{Registry, Store};
use crate::sessions::SessionTracker;
use axum::{
    routing::{get, post},
    Router,
};
use message_central_client::MessageCentralClient;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Signed-up user registry
    pub registry: Arc<RwLock<Registry>>,
    /// Persistent storage backend
    pub store: Arc<Store>,
    /// Pending OTP sessions
    pub sessions: SessionTracker,
    /// Message Central client
    pub provider: Arc<MessageCentralClient>,
    /// Built frontend location
    pub frontend_dir: PathBuf,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        registry: Registry,
        store: Store,
        provider: MessageCentralClient,
        frontend_dir: PathBuf,
    ) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            store: Arc::new(store),
            sessions: SessionTracker::new(),
            provider: Arc::new(provider),
            frontend_dir,
        }
    }
}

/// Create the API router.
///
/// The SPA's static assets are mounted only when the build directory is
/// actually present; the catch-all handler deals with the missing-build
/// case on its own.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/send_otp", post(handlers::send_otp))
        .route("/api/verify_otp", post(handlers::verify_otp))
        .route("/api/signup", post(handlers::signup));

    let static_dir = state.frontend_dir.join("static");
    if static_dir.is_dir() {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    router
        .fallback(handlers::frontend)
        // The React dev server runs on a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
