use reqwest::StatusCode;
use thiserror::Error;

/// Message shown to the user for any failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch weather data. Please try again.";

/// Why a fetch failed. The UI does not tell these apart; they only reach the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request to {provider} failed")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse {provider} response: {reason}")]
    Parse {
        provider: &'static str,
        reason: String,
    },
}

impl FetchError {
    /// The fixed, user-facing text for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
