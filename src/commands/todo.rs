//! Todo Commands
//!
//! Frontend bindings for the four todo endpoints.

use serde::Serialize;

use crate::models::TodoItem;
use super::{endpoint, item_endpoint, ApiError, API_BASE_URL};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct SetDoneArgs {
    done: bool,
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> Result<Vec<TodoItem>, ApiError> {
    let response = reqwest::Client::new()
        .get(endpoint(API_BASE_URL, "/api/v1/list"))
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

pub async fn add_todo(title: &str) -> Result<TodoItem, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint(API_BASE_URL, "/api/v1/add"))
        .json(&AddTodoArgs { title })
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

pub async fn set_todo_done(id: &str, done: bool) -> Result<(), ApiError> {
    reqwest::Client::new()
        .put(item_endpoint(API_BASE_URL, id))
        .json(&SetDoneArgs { done })
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    reqwest::Client::new()
        .delete(item_endpoint(API_BASE_URL, id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
