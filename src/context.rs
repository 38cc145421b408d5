//! Application Context
//!
//! Shared handles provided via Leptos Context API. Components read state
//! from the store (`use_app_store`); all widget actions go through
//! `AppContext::dispatch`, which also carries out the side effects the
//! board asks for.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use deck_core::{BoardAction, BoardConfig, BoardEffect, JokeSource, Route};

use crate::commands::{self, HttpJokeSource};
use crate::store::{AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<BoardConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: BoardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Apply an action to the board and run the resulting effect
    pub fn dispatch(&self, action: BoardAction) {
        let effect = self.store.board().write().dispatch(action);
        match effect {
            BoardEffect::None => {}
            BoardEffect::StartJokeFetch(ticket) => {
                let ctx = *self;
                let endpoint = self.config.with_value(|c| c.joke_endpoint.clone());
                spawn_local(async move {
                    let source = HttpJokeSource::new(endpoint);
                    let result = source.fetch_joke().await;
                    ctx.dispatch(BoardAction::JokeLoaded(ticket, result));
                });
            }
            BoardEffect::Submitted(submission) => commands::report_submission(&submission),
        }
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, route: Route) {
        if self.store.route().get() == route {
            return;
        }
        *self.store.route().write() = route;
        if let Ok(history) = window().history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("history push failed: {:?}", e);
            }
        }
    }

    /// Follow the browser's back/forward buttons
    pub fn sync_route_from_location(&self) {
        let path = window().location().pathname().unwrap_or_default();
        *self.store.route().write() = Route::from_path(&path);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
