//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The weather view: UI state and the fetch-and-fallback cycle
//! - The OpenWeather provider behind the `WeatherProvider` trait
//! - Presentation mapping and rendering of the view state
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but the view can be driven by any other front end.

pub mod config;
pub mod error;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod render;
pub mod view;

pub use config::Config;
pub use error::{FETCH_FAILED_MESSAGE, FetchError};
pub use model::WeatherRecord;
pub use presentation::{Condition, Icon};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use render::WeatherPanel;
pub use view::{FetchTicket, UiState, WeatherView};
