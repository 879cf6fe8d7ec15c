//! Condition category → icon and background gradient.

use serde::Serialize;

/// Weather categories the view has distinct artwork for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Rain,
    Drizzle,
    Clouds,
}

impl Condition {
    /// Case-insensitive; unknown or absent categories fall back to `Clouds`.
    pub fn from_category(category: Option<&str>) -> Self {
        let Some(category) = category else {
            return Condition::Clouds;
        };

        match category.to_lowercase().as_str() {
            "clear" => Condition::Clear,
            "rain" => Condition::Rain,
            "drizzle" => Condition::Drizzle,
            _ => Condition::Clouds,
        }
    }

    /// Drizzle shares the rain artwork.
    pub fn icon(self) -> Icon {
        match self {
            Condition::Clear => Icon::Sun,
            Condition::Rain | Condition::Drizzle => Icon::CloudRain,
            Condition::Clouds => Icon::Cloud,
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Condition::Clear => "from-blue-400 via-blue-300 to-blue-200",
            Condition::Rain | Condition::Drizzle => "from-gray-600 via-gray-500 to-gray-400",
            Condition::Clouds => "from-gray-500 via-gray-400 to-gray-300",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sun,
    CloudRain,
    Cloud,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::CloudRain => "🌧",
            Icon::Cloud => "☁",
        }
    }
}
