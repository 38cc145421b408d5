//! About Page Component
//!
//! Static markdown blurb plus the most recent log lines.

use leptos::prelude::*;

use crate::markdown::parse_markdown;

const ABOUT_TEXT: &str = r#"## About

A small single-page demo with three independent widgets:

- **To-Do List**: add, complete and remove tasks
- **Shopping Cart**: add and remove items
- **API Integration**: fetch a random joke from [api.chucknorris.io](https://api.chucknorris.io)

Use the [Contact](/contact) page to send a message.
"#;

#[component]
pub fn AboutPage() -> impl IntoView {
    let (log_lines, set_log_lines) = signal(rolling_logger::recent_lines());

    view! {
        <div class="page about">
            <div class="markdown-body" inner_html=parse_markdown(ABOUT_TEXT)></div>

            <div class="activity-log">
                <h3>"Recent activity"</h3>
                <button on:click=move |_| set_log_lines.set(rolling_logger::recent_lines())>
                    "Refresh"
                </button>
                <button on:click=move |_| {
                    if rolling_logger::clear_recent().is_ok() {
                        set_log_lines.set(Vec::new());
                    }
                }>
                    "Clear"
                </button>
                <ul>
                    {move || log_lines.get().into_iter().rev().map(|line| view! {
                        <li><code>{line}</code></li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
