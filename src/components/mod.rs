//! UI Components
//!
//! Leptos components making up the todo app.

mod new_todo_form;
mod todo_list_view;

pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
