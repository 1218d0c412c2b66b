//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;

/// Todo list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in insertion (display) order
    pub items: Vec<TodoItem>,
    /// Current content of the new-item input
    pub draft: String,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Rules
// ========================

/// A draft may become an item only if it is non-empty after trimming
pub fn is_submittable(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Take the untrimmed draft, leaving it empty, if it is submittable.
/// A blank draft is left untouched.
pub fn take_draft(draft: &mut String) -> Option<String> {
    if is_submittable(draft) {
        Some(std::mem::take(draft))
    } else {
        None
    }
}

/// Remove exactly one item at `position`, shifting later items down.
/// Out-of-range positions remove nothing.
pub fn remove_at(items: &mut Vec<TodoItem>, position: usize) -> bool {
    if position < items.len() {
        items.remove(position);
        true
    } else {
        false
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the draft verbatim. No trimming happens here.
pub fn store_update_draft(store: &TodoStore, text: String) {
    *store.draft().write() = text;
}

/// Append the current draft as a new item and clear the draft.
/// Returns the new item's position, or None, changing nothing, when the draft is blank.
pub fn store_add_item(store: &TodoStore) -> Option<usize> {
    let draft = store.draft();
    if !draft.with_untracked(|text| is_submittable(text)) {
        log::debug!("ignoring blank draft");
        return None;
    }
    let text = take_draft(&mut draft.write())?;
    let items = store.items();
    let position = {
        let mut items = items.write();
        items.push(TodoItem::new(text));
        items.len() - 1
    };
    log::debug!("added item at position {}", position);
    Some(position)
}

/// Remove the item at `position` from the store
pub fn store_delete_item(store: &TodoStore, position: usize) -> bool {
    let items = store.items();
    if position >= items.with_untracked(Vec::len) {
        log::debug!("no item at position {}, nothing deleted", position);
        return false;
    }
    let removed = remove_at(&mut items.write(), position);
    log::debug!("deleted item at position {}", position);
    removed
}
