use serde::{Deserialize, Serialize};

/// Current conditions for one location, in metric units.
///
/// A record is always complete: the provider either maps every field or
/// fails the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub visibility_m: u32,
    /// Coarse category such as "Clear" or "Rain".
    pub condition: String,
    pub description: String,
}

impl WeatherRecord {
    /// Demo values shown in place of a failed request.
    pub fn placeholder(city: &str) -> Self {
        Self {
            location_name: city.to_string(),
            country: "CA".to_string(),
            temperature_c: 12.0,
            feels_like_c: 10.0,
            humidity_pct: 75,
            pressure_hpa: 1013,
            wind_speed_mps: 3.5,
            visibility_m: 10_000,
            condition: "Clouds".to_string(),
            description: "overcast clouds".to_string(),
        }
    }
}
