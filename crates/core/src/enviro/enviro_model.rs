use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::opportunities::GeoPoint;

/// US EPA AQI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AqiLevel {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn description(&self) -> &'static str {
        match self {
            AqiLevel::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            AqiLevel::Moderate => {
                "Air quality is acceptable. However, there may be a risk for some people."
            }
            AqiLevel::Unhealthy => "Members of sensitive groups may experience health effects.",
            AqiLevel::VeryUnhealthy => "Health alert: everyone may experience health effects.",
            AqiLevel::Hazardous => "Health warning of emergency conditions.",
        }
    }
}

/// Classifies an AQI reading into its band. Breakpoints are inclusive
/// upper bounds: 50, 100, 150, 200.
pub fn aqi_level(aqi: u32) -> AqiLevel {
    match aqi {
        0..=50 => AqiLevel::Good,
        51..=100 => AqiLevel::Moderate,
        101..=150 => AqiLevel::Unhealthy,
        151..=200 => AqiLevel::VeryUnhealthy,
        _ => AqiLevel::Hazardous,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    pub aqi: u32,
    pub level: AqiLevel,
    /// Fine particulates, micrograms per cubic meter.
    pub pm25: u32,
    /// Coarse particulates, micrograms per cubic meter.
    pub pm10: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o3: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no2: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Degrees Celsius.
    pub temperature: i32,
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: u32,
    /// Kilometers per hour.
    pub wind_speed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<u32>,
}

/// One fetched view of conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvSnapshot {
    pub location: GeoPoint,
    pub air_quality: AirQuality,
    pub weather: Weather,
    pub fetched_at: DateTime<Utc>,
}

// ============== Tests ==============
