use std::fmt;
use std::time::Duration;

use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;

pub use dictionary::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to parse the dictionary response: {0}")]
    Deserialize(serde_json::Error),
    #[error("unexpected dictionary response: {0}")]
    UnexpectedShape(String),
    #[error("{0}")]
    NotFound(NotFoundError),
}

/// The api's explanation for a term it has no entry for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    pub title: Option<String>,
    pub message: String,
    pub resolution: Option<String>,
}

impl NotFoundError {
    pub(crate) fn no_definitions() -> Self {
        Self {
            title: None,
            message: "No Definitions Found".to_owned(),
            resolution: None,
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a single lookup as the ui consumes it.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(Word),
    NotFound(NotFoundError),
    /// Network, decoding or shape failure; the term may well exist.
    TransientError(DictionaryError),
}

impl From<Result<Word, DictionaryError>> for LookupOutcome {
    fn from(result: Result<Word, DictionaryError>) -> Self {
        match result {
            Ok(word) => LookupOutcome::Found(word),
            Err(DictionaryError::NotFound(not_found)) => LookupOutcome::NotFound(not_found),
            Err(error) => LookupOutcome::TransientError(error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    endpoint: String,
}

impl Dictionary {
    pub const DEFAULT_ENDPOINT: &'static str = DICTIONARY_API_URL;

    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DICTIONARY_API_URL)
    }

    /// Builds a client against `endpoint`; the term is appended to it as the last path segment.
    pub fn with_options(endpoint: &str, timeout: Duration) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wordfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        let mut endpoint = endpoint.to_owned();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.endpoint, word).await
    }

    /// Looks `term` up without validating it, folding every failure into the outcome.
    pub async fn lookup(&self, term: &str) -> LookupOutcome {
        let outcome = LookupOutcome::from(self.get_definition(term).await);
        match &outcome {
            LookupOutcome::Found(word) => tracing::info!(term, word = %word.word, "lookup found"),
            LookupOutcome::NotFound(not_found) => {
                tracing::info!(term, message = %not_found, "lookup not found")
            }
            LookupOutcome::TransientError(error) => {
                tracing::warn!(term, %error, "lookup failed")
            }
        }
        outcome
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
