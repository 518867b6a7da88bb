//! Todo List Component
//!
//! Renders one row per item, in the order given.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::components::TodoRow;

#[component]
pub fn TodoList(
    #[prop(into)] items: Signal<Vec<TodoItem>>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <ul id="todo-container">
            <For
                each=move || items.get()
                // done is part of the key so a flipped row re-renders
                key=|item| (item.id.clone(), item.done)
                children=move |item| view! {
                    <TodoRow item=item on_toggle=on_toggle on_delete=on_delete />
                }
            />
        </ul>
    }
}
