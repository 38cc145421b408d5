//! Page Configuration
//!
//! Reads an optional `<script id="app-config" type="application/json">`
//! block from the host page. Missing or broken config falls back to
//! defaults.

use deck_core::{BoardConfig, ConfigError};

/// Element id of the embedded JSON config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Resolve config from raw embedded text, never failing
pub fn resolve_config(raw: Option<&str>) -> (BoardConfig, Option<ConfigError>) {
    match raw.map(BoardConfig::from_json) {
        None => (BoardConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (BoardConfig::default(), Some(err)),
    }
}

/// Load config from the current document, with the error (if any) that
/// forced a fallback to defaults
pub fn load_config() -> (BoardConfig, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    resolve_config(raw.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let (config, err) = resolve_config(None);
        assert_eq!(config, BoardConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_embedded_override() {
        let (config, err) = resolve_config(Some(r#"{"app_name":"Demo","log_capacity":5}"#));
        assert!(err.is_none());
        assert_eq!(config.app_name, "Demo");
        assert_eq!(config.log_capacity, 5);
    }

    #[test]
    fn test_broken_config_reports_and_falls_back() {
        let (config, err) = resolve_config(Some("{ not json"));
        assert_eq!(config, BoardConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }
}
