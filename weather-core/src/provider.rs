use crate::{Config, FetchError, WeatherRecord, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city` in metric units.
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is not an error here; the provider reports it on each
/// fetch so the view can fall back like for any other failure.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    let api_key = config.resolved_api_key();
    if api_key.is_none() {
        tracing::warn!(
            "No OpenWeather API key configured. \
             Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        );
    }

    Box::new(OpenWeatherProvider::with_base_url(api_key, config.base_url.clone()))
}
