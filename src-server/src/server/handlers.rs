//! Route handlers for the todo API.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{TodoId, TodoItem};
use crate::repository::Repository;

use super::{ApiError, AppState};

/// Body of `POST /api/v1/add`
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    /// Missing title is stored as an empty string
    #[serde(default)]
    pub title: String,
}

/// `GET /api/v1/list`
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}

/// `POST /api/v1/add`
pub async fn add_todo(
    State(state): State<AppState>,
    Json(req): Json<AddTodoRequest>,
) -> Result<Json<TodoItem>, ApiError> {
    let todo = state.todos.create(&TodoItem::new(req.title)).await?;
    tracing::info!(id = %todo.id, title = %todo.title, "added todo");
    Ok(Json(todo))
}

/// `DELETE /api/v1/item/:id`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = TodoId::from(id);
    state.todos.delete(&id).await?;
    tracing::info!(%id, "deleted todo");
    Ok(StatusCode::OK)
}

/// `PUT /api/v1/item/:id`
pub async fn set_todo_done(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = TodoId::from(id);
    let body = json_body(&headers, &body)?;
    let done = requested_done(body.as_ref());
    state.todos.set_done(&id, done).await?;
    tracing::info!(%id, done, "updated todo");
    Ok(StatusCode::OK)
}

/// `GET /health`
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Empty or non-JSON bodies count as absent; a malformed JSON body is rejected.
fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Option<Value>, JsonRejection> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(None);
    }
    let Json(value) = Json::<Value>::from_bytes(body)?;
    Ok(Some(value))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
}

/// Only a literal JSON `true` marks the item done.
fn requested_done(body: Option<&Value>) -> bool {
    matches!(body.and_then(|v| v.get("done")), Some(Value::Bool(true)))
}
