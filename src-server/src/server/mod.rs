//! HTTP Layer
//!
//! axum router exposing the todo operations under `/api/v1`.

mod error;
mod handlers;


use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::repository::TodoRepository;

pub use error::ApiError;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoRepository>,
}

impl AppState {
    pub fn new(todos: TodoRepository) -> Self {
        Self {
            todos: Arc::new(todos),
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/list", get(handlers::list_todos))
        .route("/api/v1/add", post(handlers::add_todo))
        .route(
            "/api/v1/item/:id",
            axum::routing::delete(handlers::delete_todo).put(handlers::set_todo_done),
        )
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
