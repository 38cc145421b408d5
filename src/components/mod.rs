//! UI Components
//!
//! Leptos components for the pages and widgets.

mod about_page;
mod cart_panel;
mod contact_form;
mod home_page;
mod joke_panel;
mod nav_bar;
mod task_panel;

pub use about_page::AboutPage;
pub use cart_panel::CartPanel;
pub use contact_form::ContactForm;
pub use home_page::HomePage;
pub use joke_panel::JokePanel;
pub use nav_bar::NavBar;
pub use task_panel::TaskPanel;
