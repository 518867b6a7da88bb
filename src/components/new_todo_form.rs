//! New Todo Form Component
//!
//! Text field plus Add button. Empty input is ignored and left as-is.

use leptos::prelude::*;

/// Form for creating new todo items
#[component]
pub fn NewTodoForm(on_add: Callback<String>) -> impl IntoView {
    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(text) = submission(&title.get()) {
            on_add.run(text);
            set_title.set(String::new());
        }
    };

    view! {
        <form on:submit=submit>
            <input
                type="text"
                id="new-todo-item-title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit" id="new-todo-item-add-button">"Add"</button>
        </form>
    }
}

/// Text to submit, or None when the field is empty
fn submission(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
