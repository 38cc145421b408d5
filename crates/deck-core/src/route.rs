//! Client-Side Routes

use serde::{Deserialize, Serialize};

/// Page shown above the widgets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    About,
    Contact,
}

impl Route {
    /// Order used by the navigation bar
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    /// Resolve a location path. Anything unrecognised falls back to `Home`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/about" => Route::About,
            "/contact" => Route::Contact,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/contact?ref=nav"), Route::Contact);
        assert_eq!(Route::from_path("/contact#form"), Route::Contact);
        assert_eq!(Route::from_path("/nowhere"), Route::Home);
    }

    #[test]
    fn test_path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
