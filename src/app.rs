//! Todo App
//!
//! Root component: heading, new-item form and item list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State lives only as long as the mounted app
    let store = Store::new(TodoState::new());
    let title = config.title.clone();

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    view! {
        <div class="todo-app">
            <h1>{title}</h1>
            <NewTodoForm />
            <TodoListView />
        </div>
    }
}
