//! The weather view: owned UI state plus the fetch-and-fallback cycle.
//!
//! Handlers take `&mut WeatherView`, so there is a single writer. Overlapping
//! cycles are settled by [`FetchTicket`] generation: only the most recently
//! started cycle may write its outcome.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{error::FetchError, model::WeatherRecord, provider::WeatherProvider};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub search_input: String,
    pub current_city: String,
    pub weather: Option<WeatherRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// When the last cycle settled.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Handle for one in-flight fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a started fetch cycle must be completed"]
pub struct FetchTicket {
    generation: u64,
    city: String,
}

impl FetchTicket {
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug)]
pub struct WeatherView {
    state: UiState,
    generation: u64,
    fallback_on_error: bool,
}

impl WeatherView {
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            state: UiState {
                current_city: default_city.into(),
                ..UiState::default()
            },
            generation: 0,
            fallback_on_error: true,
        }
    }

    /// Disable or enable the placeholder record shown on failure.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_on_error = enabled;
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Run the initial cycle for the default city.
    pub async fn mount<P>(&mut self, provider: &P)
    where
        P: WeatherProvider + ?Sized,
    {
        let city = self.state.current_city.clone();
        self.fetch_city(provider, &city).await;
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.state.search_input = text.into();
    }

    /// Start a cycle for the trimmed search input and clear the input.
    ///
    /// Returns `None` without touching state when the input is blank.
    pub fn submit_search(&mut self) -> Option<FetchTicket> {
        let city = self.state.search_input.trim().to_string();
        if city.is_empty() {
            return None;
        }

        let ticket = self.begin_fetch(&city);
        self.state.search_input.clear();
        Some(ticket)
    }

    /// Submit the search box and drive the resulting cycle to completion.
    ///
    /// Returns `false` if the submission was a no-op.
    pub async fn search<P>(&mut self, provider: &P) -> bool
    where
        P: WeatherProvider + ?Sized,
    {
        let Some(ticket) = self.submit_search() else {
            return false;
        };

        let outcome = provider.current_weather(ticket.city()).await;
        self.complete_fetch(ticket, outcome);
        true
    }

    /// One full cycle for `city`.
    pub async fn fetch_city<P>(&mut self, provider: &P, city: &str)
    where
        P: WeatherProvider + ?Sized,
    {
        let ticket = self.begin_fetch(city);
        let outcome = provider.current_weather(ticket.city()).await;
        self.complete_fetch(ticket, outcome);
    }

    pub fn begin_fetch(&mut self, city: &str) -> FetchTicket {
        self.generation += 1;
        self.state.is_loading = true;
        self.state.error_message = None;
        self.state.weather = None;

        debug!(city, generation = self.generation, "fetch cycle started");

        FetchTicket {
            generation: self.generation,
            city: city.to_string(),
        }
    }

    /// Settle state from a cycle's outcome.
    ///
    /// Returns `false` if a newer cycle was started since `ticket` was issued;
    /// the outcome is then dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<WeatherRecord, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                city = %ticket.city,
                generation = ticket.generation,
                latest = self.generation,
                "discarding superseded fetch result"
            );
            return false;
        }

        match outcome {
            Ok(record) => {
                info!(city = %ticket.city, location = %record.location_name, "weather updated");
                self.state.weather = Some(record);
                self.state.current_city = ticket.city;
                self.state.error_message = None;
            }
            Err(err) => {
                warn!(city = %ticket.city, error = %err, "weather fetch failed");
                self.state.error_message = Some(err.user_message().to_string());
                self.state.weather = self
                    .fallback_on_error
                    .then(|| WeatherRecord::placeholder(&ticket.city));
            }
        }

        self.state.is_loading = false;
        self.state.updated_at = Some(Utc::now());
        true
    }
}
