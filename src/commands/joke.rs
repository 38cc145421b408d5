//! Joke Endpoint Client

use async_trait::async_trait;
use deck_core::{parse_joke, FetchError, FetchResult, JokeSource};

/// Fetches jokes over HTTP with the browser's fetch API
pub struct HttpJokeSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpJokeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

/// Anything outside 2xx is a failed fetch
fn check_status(status: reqwest::StatusCode) -> FetchResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&self) -> FetchResult<String> {
        log::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_joke(&body)
    }
}
