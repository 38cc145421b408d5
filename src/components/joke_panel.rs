//! Joke Fetcher Component
//!
//! Shows exactly one of: loading text, error message, or the joke.

use leptos::prelude::*;

use deck_core::{BoardAction, JokeFetch};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn JokePanel() -> impl IntoView {
    let ctx = use_app_context();
    let board = use_app_store().board();

    let text_class = move || match board.read().joke() {
        JokeFetch::Loading => "joke loading",
        JokeFetch::Failure(_) => "joke error",
        JokeFetch::Idle | JokeFetch::Success(_) => "joke",
    };

    view! {
        <div class="api">
            <h2>"API Integration"</h2>
            <button on:click=move |_| ctx.dispatch(BoardAction::FetchJoke)>"Fetch Joke"</button>
            <p class=text_class>{move || board.read().joke().display_text().to_string()}</p>
        </div>
    }
}
