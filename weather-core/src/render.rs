//! Presentational tree derived from [`UiState`].

use serde::Serialize;
use std::fmt;

use crate::{
    model::WeatherRecord,
    presentation::{Condition, Icon},
    view::UiState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherPanel {
    pub city: String,
    pub loading: bool,
    pub error: Option<String>,
    pub icon: Icon,
    pub gradient: &'static str,
    pub card: Option<WeatherCard>,
    pub updated_at: Option<String>,
}

/// Formatted fields of a [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCard {
    pub location: String,
    pub temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub description: String,
    pub humidity: String,
    pub pressure: String,
    pub wind: String,
    pub visibility: String,
}

impl WeatherPanel {
    pub fn from_state(state: &UiState) -> Self {
        let condition =
            Condition::from_category(state.weather.as_ref().map(|w| w.condition.as_str()));

        Self {
            city: state.current_city.clone(),
            loading: state.is_loading,
            error: state.error_message.clone(),
            icon: condition.icon(),
            gradient: condition.gradient(),
            card: state.weather.as_ref().map(WeatherCard::from_record),
            updated_at: state.updated_at.map(|t| t.format("%H:%M UTC").to_string()),
        }
    }
}

impl WeatherCard {
    pub fn from_record(rec: &WeatherRecord) -> Self {
        Self {
            location: format!("{}, {}", rec.location_name, rec.country),
            temperature: format_temperature(rec.temperature_c),
            feels_like: format_temperature(rec.feels_like_c),
            condition: rec.condition.clone(),
            description: rec.description.clone(),
            humidity: format!("{}%", rec.humidity_pct),
            pressure: format!("{} hPa", rec.pressure_hpa),
            wind: format!("{} m/s", rec.wind_speed_mps),
            visibility: format_visibility(rec.visibility_m),
        }
    }
}

/// Whole degrees, halves rounded up: `20.4` → `"20°C"`, `-2.5` → `"-2°C"`.
pub fn format_temperature(celsius: f64) -> String {
    let rounded = (celsius + 0.5).floor();
    // Avoid printing "-0°C".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}°C")
}

/// Kilometres with one decimal, halves rounded up: `10000` → `"10.0 km"`, `250` → `"0.3 km"`.
pub fn format_visibility(meters: u32) -> String {
    let tenths = (u64::from(meters) + 50) / 100;
    format!("{}.{} km", tenths / 10, tenths % 10)
}

impl fmt::Display for WeatherPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(err) = &self.error {
            writeln!(f, "! {err}")?;
        }

        if self.loading {
            return writeln!(f, "Loading weather...");
        }

        let Some(card) = &self.card else {
            return writeln!(f, "No weather data for {}.", self.city);
        };

        writeln!(f, "{}  {}", self.icon.glyph(), card.location)?;
        writeln!(f, "   {}  (feels like {})", card.temperature, card.feels_like)?;
        writeln!(f, "   {}: {}", card.condition, card.description)?;
        writeln!(f)?;
        writeln!(f, "   Humidity    {}", card.humidity)?;
        writeln!(f, "   Pressure    {}", card.pressure)?;
        writeln!(f, "   Wind        {}", card.wind)?;
        writeln!(f, "   Visibility  {}", card.visibility)?;

        if let Some(updated) = &self.updated_at {
            writeln!(f, "   Updated {updated}")?;
        }

        Ok(())
    }
}
