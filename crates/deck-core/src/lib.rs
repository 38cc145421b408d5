//! Widget Deck Core
//!
//! State and rules behind the demo page, free of any UI framework:
//! - list: ordered list store shared by tasks and cart
//! - contact: contact form fields and validation
//! - joke: remote joke fetch state machine
//! - board: page-level controller composing the above

pub mod board;
pub mod config;
pub mod contact;
pub mod error;
pub mod joke;
pub mod list;
pub mod models;
pub mod route;

pub use board::{Board, BoardAction, BoardEffect, BoardSummary, CART_SUBTOTAL_PLACEHOLDER};
pub use config::BoardConfig;
pub use contact::{ContactForm, ContactSubmission, Field, FieldErrors};
pub use error::{ConfigError, FetchError, FetchResult, FETCH_ERROR_MESSAGE};
pub use joke::{parse_joke, JokeFetch, JokeFlow, JokeSource, JokeTicket};
pub use list::{CartList, ListStore, TaskList};
pub use models::{CartItem, Completable, ListEntry, Task};
pub use route::Route;
