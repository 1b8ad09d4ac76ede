use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{AuthService, MovieProvider},
};

pub mod ai;
pub mod auth;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    pub fn new(auth: AuthService, provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            auth: Arc::new(auth),
            provider,
        }
    }
}

/// Creates the application router with all routes
///
/// CORS is left to the caller so tests can exercise the routes without it.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes())
        .nest("/api/ai", ai_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Routes under /api/auth
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Routes under /api/ai
fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/genre/:genre_id", get(ai::get_genre_content))
        .route("/recommend", post(ai::recommend))
}

/// Welcome / liveness endpoint
async fn root() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Welcome to MovieRec API!" }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
