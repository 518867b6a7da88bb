//! Todo Row Component
//!
//! A single item: checkbox bound to `done`, title, delete button.

use leptos::prelude::*;

use crate::models::TodoItem;

#[component]
pub fn TodoRow(
    item: TodoItem,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = item.id.clone();
    let delete_id = item.id;

    view! {
        <li>
            <label>
                <input
                    type="checkbox"
                    class="checkbox"
                    prop:checked=item.done
                    on:change=move |_| on_toggle.run(toggle_id.clone())
                />
                {item.title}
                <button
                    class="delete-button"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </label>
        </li>
    }
}
