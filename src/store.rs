//! Todo State Store
//!
//! Uses Leptos reactive_stores for the in-memory todo list and holds the
//! controller operations that mirror server state optimistically.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, ApiError};
use crate::models::TodoItem;

/// Client-side mirror of the server's todo list
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in server return order
    pub items: Vec<TodoItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Reactive view of the current items
pub fn items_signal(store: AppStore) -> Signal<Vec<TodoItem>> {
    Signal::derive(move || store.items().get())
}

// ========================
// Controller
// ========================

/// Replace local state with the server's full list
pub fn refresh(store: AppStore) {
    spawn_local(async move {
        match commands::list_todos().await {
            Ok(loaded) => {
                log(&format!("[TODO] Loaded {} items", loaded.len()));
                *store.items().write() = loaded;
            }
            Err(e) => log_error("fetching todo list", &e),
        }
    });
}

/// Create an item on the server and append the result locally
pub fn submit_add(store: AppStore, title: String) {
    spawn_local(async move {
        match commands::add_todo(&title).await {
            Ok(created) => append_item(&mut store.items().write(), created),
            Err(e) => log_error("adding todo item", &e),
        }
    });
}

/// Flip `done` locally, then persist it. No rollback on failure.
pub fn toggle(store: AppStore, id: String) {
    let done = done_to_send(&mut store.items().write(), &id);

    spawn_local(async move {
        let result = commands::set_todo_done(&id, done).await;
        settle(store, after_mutation("updating todo item", result));
    });
}

/// Drop the item locally, then delete it on the server. No rollback on failure.
pub fn remove(store: AppStore, id: String) {
    remove_item(&mut store.items().write(), &id);

    spawn_local(async move {
        let result = commands::delete_todo(&id).await;
        settle(store, after_mutation("deleting todo item", result));
    });
}

/// Outcome of a toggle/remove request once it completes
#[derive(Debug, PartialEq, Eq)]
pub enum AfterMutation {
    /// Request succeeded: re-fetch the list from the server
    Resync,
    /// Request failed: report it, keep the optimistic local state
    Report(String),
}

pub fn after_mutation<E: std::fmt::Display>(action: &str, result: Result<(), E>) -> AfterMutation {
    match result {
        Ok(()) => AfterMutation::Resync,
        Err(e) => AfterMutation::Report(error_message(action, &e)),
    }
}

fn settle(store: AppStore, outcome: AfterMutation) {
    match outcome {
        AfterMutation::Resync => refresh(store),
        AfterMutation::Report(message) => web_sys::console::error_1(&message.into()),
    }
}

// ========================
// Local state helpers
// ========================

/// Append a created item
pub fn append_item(items: &mut Vec<TodoItem>, item: TodoItem) {
    items.push(item);
}

/// Flip `done` of the matching item; returns the new value, or None if absent
pub fn flip_done(items: &mut [TodoItem], id: &str) -> Option<bool> {
    items.iter_mut().find(|item| item.id == id).map(|item| {
        item.done = !item.done;
        item.done
    })
}

/// Flip locally and return the value to persist; an id missing locally sends `false`
pub fn done_to_send(items: &mut [TodoItem], id: &str) -> bool {
    flip_done(items, id).unwrap_or(false)
}

/// Remove the item with the given id, if present
pub fn remove_item(items: &mut Vec<TodoItem>, id: &str) {
    items.retain(|item| item.id != id);
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn log_error(action: &str, error: &ApiError) {
    web_sys::console::error_1(&error_message(action, error).into());
}

fn error_message(action: &str, error: &impl std::fmt::Display) -> String {
    format!("[TODO] Error {}: {}", action, error)
}
