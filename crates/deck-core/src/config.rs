//! Board Configuration
//!
//! Every field has a default, so an empty or partial JSON object is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::joke::DEFAULT_JOKE_ENDPOINT;

/// Runtime settings for the demo page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// URL the joke widget fetches from
    pub joke_endpoint: String,
    /// How many log lines the in-memory logger keeps
    pub log_capacity: usize,
    /// Prefix for log lines
    pub app_name: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            joke_endpoint: DEFAULT_JOKE_ENDPOINT.to_string(),
            log_capacity: 200,
            app_name: "WidgetDeck".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and check a JSON config blob
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.joke_endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "joke_endpoint must be an http(s) URL, got {:?}",
                self.joke_endpoint
            )));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::Invalid("log_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(BoardConfig::from_json("").unwrap(), BoardConfig::default());
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = BoardConfig::from_json(r#"{"log_capacity": 16}"#).unwrap();
        assert_eq!(config.log_capacity, 16);
        assert_eq!(config.joke_endpoint, DEFAULT_JOKE_ENDPOINT);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(BoardConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            BoardConfig::from_json(r#"{"joke_endpoint": "ftp://x"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{"log_capacity": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
