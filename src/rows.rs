//! Row Projection
//!
//! Helper functions for list rendering.

use crate::models::TodoItem;

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Zero-based position in the list at render time
    pub position: usize,
    pub text: String,
}

impl TodoRow {
    /// Key for keyed list rendering.
    /// Includes the text so a reused row never shows the text of a deleted neighbour.
    pub fn key(&self) -> (usize, String) {
        (self.position, self.text.clone())
    }
}

/// Project items to rows in display order
pub fn list_rows(items: &[TodoItem]) -> Vec<TodoRow> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| TodoRow {
            position,
            text: item.text.clone(),
        })
        .collect()
}
