use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use super::enviro_model::{aqi_level, AirQuality, EnvSnapshot, Weather};
use crate::opportunities::GeoPoint;
use crate::Result;

/// Source of environmental snapshots for a location.
#[async_trait]
pub trait EnvironmentalProviderTrait: Send + Sync {
    async fn fetch(&self, location: GeoPoint) -> Result<EnvSnapshot>;
}

/// Provider producing plausible readings after an artificial delay.
/// AQI lands in the 30-100 range, temperature in 15-35 C.
pub struct SimulatedProvider {
    delay: Duration,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

const CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Partly Cloudy", "Rainy"];

#[async_trait]
impl EnvironmentalProviderTrait for SimulatedProvider {
    async fn fetch(&self, location: GeoPoint) -> Result<EnvSnapshot> {
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        let aqi: u32 = rng.gen_range(30..=100);
        Ok(EnvSnapshot {
            location,
            air_quality: AirQuality {
                aqi,
                level: aqi_level(aqi),
                pm25: 5 + aqi * 15 / 100,
                pm10: 10 + aqi * 30 / 100,
                o3: Some(rng.gen_range(30..=70)),
                no2: Some(rng.gen_range(10..=40)),
                co: Some(rng.gen_range(200..=500)),
            },
            weather: Weather {
                temperature: rng.gen_range(15..=35),
                condition: CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_string(),
                humidity: rng.gen_range(40..=80),
                wind_speed: rng.gen_range(5..=20),
                uv_index: Some(rng.gen_range(3..=10)),
            },
            fetched_at: Utc::now(),
        })
    }
}

// ============== Tests ==============
