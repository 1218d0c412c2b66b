//! New Todo Form Component
//!
//! Text input bound to the draft plus the Add button.

use leptos::prelude::*;

use crate::config::use_config;
use crate::store::{store_add_item, store_update_draft, use_todo_store, TodoStateStoreFields};

/// Form for adding new items. Enter in the input submits as well.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let placeholder = use_config().placeholder;

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_item(&store);
    };

    view! {
        <form class="new-todo-form" on:submit=add_item>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || store.draft().get()
                on:input=move |ev| store_update_draft(&store, event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
