//! Remote Joke Fetch
//!
//! A single linear state machine: `Idle → Loading → Success | Failure`.
//! Every new fetch restarts from `Loading`. Completions are applied in
//! arrival order, so an older request finishing late overwrites a newer one.

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, FetchResult};

/// Public endpoint returning `{ "value": "<joke>" , ... }`
pub const DEFAULT_JOKE_ENDPOINT: &str = "https://api.chucknorris.io/jokes/random";

/// Text shown while a request is outstanding
pub const LOADING_TEXT: &str = "Loading...";

/// Identifies one fetch request. Issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JokeTicket(pub u64);

/// Fetch state as seen by the view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JokeFetch {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

impl JokeFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self, JokeFetch::Loading)
    }

    /// The one line the widget shows: loading text, else the error, else
    /// the joke (empty before the first fetch).
    pub fn display_text(&self) -> &str {
        match self {
            JokeFetch::Idle => "",
            JokeFetch::Loading => LOADING_TEXT,
            JokeFetch::Success(joke) => joke,
            JokeFetch::Failure(message) => message,
        }
    }
}

/// Issues tickets and applies completions to the fetch state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeFlow {
    state: JokeFetch,
    issued: u64,
}

impl JokeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &JokeFetch {
        &self.state
    }

    /// Most recently issued ticket, if any
    pub fn latest(&self) -> Option<JokeTicket> {
        (self.issued > 0).then_some(JokeTicket(self.issued))
    }

    /// Enter `Loading`, dropping any earlier result
    pub fn start(&mut self) -> JokeTicket {
        self.issued += 1;
        self.state = JokeFetch::Loading;
        JokeTicket(self.issued)
    }

    /// Apply a completion. Stale tickets are applied too (last write wins).
    pub fn resolve(&mut self, ticket: JokeTicket, result: FetchResult<String>) {
        if Some(ticket) != self.latest() {
            warn!(
                "joke fetch #{} finished after #{}; applying anyway",
                ticket.0, self.issued
            );
        }
        self.state = match result {
            Ok(joke) => {
                info!("joke fetch #{} succeeded", ticket.0);
                JokeFetch::Success(joke)
            }
            Err(err) => {
                warn!("joke fetch #{} failed: {}", ticket.0, err);
                JokeFetch::Failure(err.user_message().to_string())
            }
        };
    }
}

#[derive(Debug, Deserialize)]
struct JokePayload {
    value: String,
}

/// Extract the joke text from a response body
pub fn parse_joke(body: &str) -> FetchResult<String> {
    serde_json::from_str::<JokePayload>(body)
        .map(|payload| payload.value)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Anything that can produce a joke
#[async_trait(?Send)]
pub trait JokeSource {
    async fn fetch_joke(&self) -> FetchResult<String>;
}

/// Run one full fetch cycle against `source`, start to finish
pub async fn fetch_into<S: JokeSource + ?Sized>(source: &S, flow: &mut JokeFlow) {
    let ticket = flow.start();
    let result = source.fetch_joke().await;
    flow.resolve(ticket, result);
}
