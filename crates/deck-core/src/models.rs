//! List Entry Entities
//!
//! Tasks and cart items as stored by `ListStore`. Neither has an identity
//! beyond its position in the list.

use serde::{Deserialize, Serialize};

/// Marker prepended to completed task labels when rendered
pub const COMPLETED_MARKER: &str = "✓";

/// Something a `ListStore` can hold
pub trait ListEntry: Clone {
    /// Build an entry from raw user input (stored as typed, not trimmed)
    fn from_input(raw: &str) -> Self;

    /// The label as the user typed it
    fn label(&self) -> &str;
}

/// Entries that carry a completion flag
pub trait Completable {
    fn is_completed(&self) -> bool;

    /// Set the completion flag. Calling it again has no further effect.
    fn mark_complete(&mut self);
}

/// A to-do list task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Label text, untrimmed
    pub label: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: false,
        }
    }

    /// Label as rendered in the list, with the completion marker if done
    pub fn display_label(&self) -> String {
        if self.completed {
            format!("{} {}", COMPLETED_MARKER, self.label)
        } else {
            self.label.clone()
        }
    }
}

impl ListEntry for Task {
    fn from_input(raw: &str) -> Self {
        Task::new(raw)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl Completable for Task {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn mark_complete(&mut self) {
        self.completed = true;
    }
}

/// A shopping cart line. No price or quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub label: String,
}

impl CartItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl ListEntry for CartItem {
    fn from_input(raw: &str) -> Self {
        CartItem::new(raw)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::from_input("  buy milk ");
        assert_eq!(task.label(), "  buy milk ");
        assert!(!task.is_completed());
    }

    #[test]
    fn test_display_label_adds_marker_only_when_completed() {
        let mut task = Task::new("Write report");
        assert_eq!(task.display_label(), "Write report");

        task.mark_complete();
        assert_eq!(task.display_label(), "✓ Write report");
        // Stored label is never decorated
        assert_eq!(task.label, "Write report");
    }

    #[test]
    fn test_mark_complete_twice() {
        let mut task = Task::new("a");
        task.mark_complete();
        task.mark_complete();
        assert!(task.completed);
        assert_eq!(task.display_label(), "✓ a");
    }

    #[test]
    fn test_cart_item_keeps_raw_label() {
        let item = CartItem::from_input("eggs ");
        assert_eq!(item.label(), "eggs ");
    }
}
