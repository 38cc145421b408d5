//! Widget Deck App
//!
//! Root component: navigation, the routed page, then the three widgets.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use deck_core::{BoardConfig, Route};

use crate::components::{
    AboutPage, CartPanel, ContactForm, HomePage, JokePanel, NavBar, TaskPanel,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();
    let store = Store::new(AppState::new(Route::from_path(&path)));
    let ctx = AppContext::new(store, config);

    // Provide store and context to all children
    provide_context(store);
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_route_from_location());

    view! {
        <div class="App">
            <NavBar />

            {move || match store.route().get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::About => view! { <AboutPage /> }.into_any(),
                Route::Contact => view! { <ContactForm /> }.into_any(),
            }}

            <TaskPanel />
            <CartPanel />
            <JokePanel />
        </div>
    }
}
