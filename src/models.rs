//! Frontend Models
//!
//! Data structures held in the todo store.

/// A single todo entry. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoItem {
    pub text: String,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for TodoItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
