//! Todo Frontend App
//!
//! Owns the todo store and threads the toggle/delete/add callbacks down.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoList};
use crate::store::{self, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let todos = Store::new(AppState::default());

    // Load items on mount
    Effect::new(move |_| store::refresh(todos));

    let on_toggle = Callback::new(move |id: String| store::toggle(todos, id));
    let on_delete = Callback::new(move |id: String| store::remove(todos, id));
    let on_add = Callback::new(move |title: String| store::submit_add(todos, title));

    view! {
        <div>
            <h1>"TODO List"</h1>
            <TodoList
                items=store::items_signal(todos)
                on_toggle=on_toggle
                on_delete=on_delete
            />
            <NewTodoForm on_add=on_add />
        </div>
    }
}
