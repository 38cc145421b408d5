//! Shopping Cart Component

use leptos::prelude::*;

use deck_core::BoardAction;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_app_context();
    let board = use_app_store().board();

    view! {
        <div class="cart">
            <h2>"Shopping Cart"</h2>
            <input
                type="text"
                placeholder="Add an item"
                prop:value=move || board.read().cart().draft().to_string()
                on:input=move |ev| {
                    ctx.dispatch(BoardAction::EditCartDraft(event_target_value(&ev)))
                }
            />
            <button on:click=move |_| ctx.dispatch(BoardAction::AddCartItem)>"Add Item"</button>
            <ul>
                {move || board.read().cart().items().iter().enumerate().map(|(index, item)| {
                    view! {
                        <li>
                            {item.label.clone()}
                            <button on:click=move |_| {
                                ctx.dispatch(BoardAction::RemoveCartItem(index))
                            }>
                                "Remove"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <p>{move || board.read().summary().cart_line()}</p>
        </div>
    }
}
