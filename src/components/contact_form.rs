//! Contact Form Component
//!
//! Mounted only on the contact page. Field values and errors live in the
//! board; this component only renders them and forwards input.

use leptos::prelude::*;

use deck_core::{BoardAction, Field};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let board = use_app_store().board();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(BoardAction::SubmitContact);
    };

    view! {
        <div class="page contact">
            <h2>"Contact"</h2>
            <form on:submit=on_submit>
                {Field::ALL.into_iter().map(|field| {
                    let value = move || board.read().contact().value(field).to_string();
                    let on_input = move |ev: web_sys::Event| {
                        ctx.dispatch(BoardAction::EditContact(field, event_target_value(&ev)));
                    };
                    let input = match field {
                        Field::Message => view! {
                            <textarea id=field.as_str() prop:value=value on:input=on_input />
                        }.into_any(),
                        Field::Email => view! {
                            <input
                                type="email"
                                id=field.as_str()
                                prop:value=value
                                on:input=on_input
                            />
                        }.into_any(),
                        Field::Name => view! {
                            <input
                                type="text"
                                id=field.as_str()
                                prop:value=value
                                on:input=on_input
                            />
                        }.into_any(),
                    };
                    view! {
                        <div>
                            <label for=field.as_str()>{field.label()}</label>
                            {input}
                            {move || board.read().contact().error(field).map(|msg| view! {
                                <p class="error">{msg.to_string()}</p>
                            })}
                        </div>
                    }
                }).collect_view()}

                <button type="submit">"Submit"</button>
            </form>
        </div>
    }
}
