//! Environmental conditions: AQI classification, snapshot models, a
//! provider seam for fetching, and condition-driven advisory tips.

mod enviro_fetcher;
mod enviro_model;
mod enviro_provider;
mod enviro_tips;

pub use enviro_fetcher::SnapshotFetcher;
pub use enviro_model::{aqi_level, AirQuality, AqiLevel, EnvSnapshot, Weather};
pub use enviro_provider::{EnvironmentalProviderTrait, SimulatedProvider};
pub use enviro_tips::advisory_tips;
