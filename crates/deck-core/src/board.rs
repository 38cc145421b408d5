//! Board: Page-Level Controller
//!
//! Owns the task list, the cart, the contact form and the joke flow, routes
//! UI actions to them, and refreshes the display summary after each one.
//! Side effects (network, logging the submission) are returned to the caller
//! as `BoardEffect`s rather than performed here.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::contact::{ContactForm, ContactSubmission, Field};
use crate::error::FetchResult;
use crate::joke::{JokeFetch, JokeFlow, JokeTicket};
use crate::list::{CartList, TaskList};

/// Cart subtotal shown in the footer. There is no price model.
pub const CART_SUBTOTAL_PLACEHOLDER: f64 = 0.0;

/// User actions the board understands
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    EditTaskDraft(String),
    AddTask,
    CompleteTask(usize),
    RemoveTask(usize),
    EditCartDraft(String),
    AddCartItem,
    RemoveCartItem(usize),
    EditContact(Field, String),
    SubmitContact,
    FetchJoke,
    JokeLoaded(JokeTicket, FetchResult<String>),
}

/// Work the caller must carry out after a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEffect {
    None,
    /// Start a request and report back with `JokeLoaded(ticket, ..)`
    StartJokeFetch(JokeTicket),
    /// A validated contact message for onward handling
    Submitted(ContactSubmission),
}

/// Derived numbers shown under the widgets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_items: usize,
    pub subtotal: f64,
}

impl BoardSummary {
    pub fn tasks_line(&self) -> String {
        format!(
            "Total Tasks: {} | Completed Tasks: {}",
            self.total_tasks, self.completed_tasks
        )
    }

    pub fn cart_line(&self) -> String {
        format!(
            "Total Items: {} | Subtotal: ${:.2}",
            self.total_items, self.subtotal
        )
    }
}

/// All page state, composed from per-widget state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tasks: TaskList,
    cart: CartList,
    contact: ContactForm,
    joke: JokeFlow,
    summary: BoardSummary,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::default();
        board.refresh_summary();
        board
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn cart(&self) -> &CartList {
        &self.cart
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn joke(&self) -> &JokeFetch {
        self.joke.state()
    }

    pub fn summary(&self) -> BoardSummary {
        self.summary
    }

    /// Apply one action and recompute the summary
    pub fn dispatch(&mut self, action: BoardAction) -> BoardEffect {
        debug!("dispatch: {:?}", action);
        let effect = match action {
            BoardAction::EditTaskDraft(text) => {
                self.tasks.set_draft(text);
                BoardEffect::None
            }
            BoardAction::AddTask => {
                self.tasks.add_draft();
                BoardEffect::None
            }
            BoardAction::CompleteTask(index) => {
                self.tasks.mark_complete_at(index);
                BoardEffect::None
            }
            BoardAction::RemoveTask(index) => {
                self.tasks.remove_at(index);
                BoardEffect::None
            }
            BoardAction::EditCartDraft(text) => {
                self.cart.set_draft(text);
                BoardEffect::None
            }
            BoardAction::AddCartItem => {
                self.cart.add_draft();
                BoardEffect::None
            }
            BoardAction::RemoveCartItem(index) => {
                self.cart.remove_at(index);
                BoardEffect::None
            }
            BoardAction::EditContact(field, value) => {
                self.contact.set(field, value);
                BoardEffect::None
            }
            BoardAction::SubmitContact => match self.contact.submit() {
                Ok(submission) => BoardEffect::Submitted(submission),
                Err(_) => BoardEffect::None,
            },
            BoardAction::FetchJoke => BoardEffect::StartJokeFetch(self.joke.start()),
            BoardAction::JokeLoaded(ticket, result) => {
                self.joke.resolve(ticket, result);
                BoardEffect::None
            }
        };
        self.refresh_summary();
        effect
    }

    fn refresh_summary(&mut self) {
        self.summary = BoardSummary {
            total_tasks: self.tasks.count(),
            completed_tasks: self.tasks.completed_count(),
            total_items: self.cart.count(),
            subtotal: CART_SUBTOTAL_PLACEHOLDER,
        };
    }
}
