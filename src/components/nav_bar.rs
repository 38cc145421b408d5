//! Navigation Bar Component
//!
//! Links for the three pages. Clicks are handled client-side.

use leptos::prelude::*;

use deck_core::Route;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <nav>
            <ul>
                {Route::ALL.into_iter().map(|route| {
                    let link_class = move || {
                        if store.route().get() == route {
                            "nav-link active"
                        } else {
                            "nav-link"
                        }
                    };
                    view! {
                        <li>
                            <a
                                href=route.path()
                                class=link_class
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.navigate(route);
                                }
                            >
                                {route.title()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
