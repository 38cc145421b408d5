//! Home Page Component

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <h2>"Home"</h2>
            <p>"Keep a to-do list, fill a shopping cart, or fetch a joke below."</p>
        </div>
    }
}
