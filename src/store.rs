//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use deck_core::{Board, Route};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Widgets and contact form
    pub board: Board,
    /// Page shown above the widgets
    pub route: Route,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            board: Board::new(),
            route,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_given_route() {
        let state = AppState::new(Route::Contact);
        assert_eq!(state.route, Route::Contact);
        assert_eq!(state.board, Board::new());
        assert_eq!(AppState::default().route, Route::Home);
    }
}
