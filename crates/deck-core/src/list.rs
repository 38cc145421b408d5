//! Ordered List Store
//!
//! Position-indexed list with an input buffer, shared by the task list and
//! the shopping cart. Invalid indices and blank input are ignored silently.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{CartItem, Completable, ListEntry, Task};

/// Ordered list plus the text currently typed into its input box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStore<T> {
    items: Vec<T>,
    draft: String,
}

pub type TaskList = ListStore<Task>;
pub type CartList = ListStore<CartItem>;

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
        }
    }
}

impl<T: ListEntry> ListStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input buffer
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the input buffer (one call per keystroke)
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append `raw` unless it is blank after trimming.
    ///
    /// The entry keeps `raw` exactly as typed. On success the input buffer
    /// is cleared. Returns whether an entry was added.
    pub fn add(&mut self, raw: &str) -> bool {
        if raw.trim().is_empty() {
            return false;
        }
        self.items.push(T::from_input(raw));
        self.draft.clear();
        debug!("list add: {:?} (len={})", raw, self.items.len());
        true
    }

    /// `add` applied to the input buffer
    pub fn add_draft(&mut self) -> bool {
        let raw = std::mem::take(&mut self.draft);
        let added = self.add(&raw);
        if !added {
            self.draft = raw;
        }
        added
    }

    /// Remove the entry at `index`, shifting later entries down.
    /// Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            debug!("list remove ignored: index {} out of range", index);
            return None;
        }
        let removed = self.items.remove(index);
        debug!("list remove: index {} (len={})", index, self.items.len());
        Some(removed)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ListEntry + Completable> ListStore<T> {
    /// Mark the entry at `index` completed. Idempotent; out of range is a
    /// no-op. Returns whether the flag changed.
    pub fn mark_complete_at(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(entry) if !entry.is_completed() => {
                entry.mark_complete();
                debug!("list complete: index {}", index);
                true
            }
            Some(_) => false,
            None => {
                debug!("list complete ignored: index {} out of range", index);
                false
            }
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|entry| entry.is_completed()).count()
    }
}
