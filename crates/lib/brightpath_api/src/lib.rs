//! # brightpath_api
//!
//! HTTP API library for BrightPath.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use brightpath_core::relay::{Relay, RelayError};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{activities, coach, health, relay};

/// Route paths.
pub mod routes {
    pub const GET_API_HEALTH: &str = "/api/health";
    pub const POST_API_BOTPRESS_MESSAGE: &str = "/api/botpress/message";
    pub const GET_API_ACTIVITIES: &str = "/api/activities";
    pub const GET_API_ACTIVITIES_ID: &str = "/api/activities/{id}";
    pub const GET_API_COACH_TASKS: &str = "/api/coach/tasks";
    pub const POST_API_COACH_ANALYZE: &str = "/api/coach/analyze";
    pub const POST_API_COACH_PROGRESS: &str = "/api/coach/progress";
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream chat relay; read-only after startup.
    pub relay: Arc<Relay>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the relay from `config.upstream`.
    pub fn new(config: ApiConfig) -> Result<Self, RelayError> {
        let relay = Relay::new(&config.upstream)?;
        Ok(Self {
            relay: Arc::new(relay),
            config,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::POST_API_BOTPRESS_MESSAGE, post(relay::relay_handler))
        .route(routes::GET_API_ACTIVITIES, get(activities::list_activities_handler))
        .route(routes::GET_API_ACTIVITIES_ID, get(activities::get_activity_handler))
        .route(routes::GET_API_COACH_TASKS, get(coach::list_tasks_handler))
        .route(routes::POST_API_COACH_ANALYZE, post(coach::analyze_handler))
        .route(routes::POST_API_COACH_PROGRESS, post(coach::progress_handler))
        .layer(cors)
        .with_state(state)
}
