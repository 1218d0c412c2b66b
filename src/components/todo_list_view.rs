//! Todo List View Component
//!
//! Ordered list of items, each with a Delete button.

use leptos::prelude::*;

use crate::rows::{list_rows, TodoRow};
use crate::store::{store_delete_item, use_todo_store, TodoStateStoreFields};

/// All items in display order
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || list_rows(&store.items().get());

    view! {
        <ul class="todo-list">
            <For
                each=rows
                key=TodoRow::key
                children=move |row| view! { <TodoListRow row=row /> }
            />
        </ul>
    }
}

/// A single list entry
#[component]
fn TodoListRow(row: TodoRow) -> impl IntoView {
    let store = use_todo_store();
    let position = row.position;

    view! {
        <li class="todo-row">
            <span class="todo-text">{row.text}</span>
            " "
            <button class="delete-btn" on:click=move |_| {
                store_delete_item(&store, position);
            }>"Delete"</button>
        </li>
    }
}
