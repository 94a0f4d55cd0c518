//! Input models for the footprint calculator. All quantities default to
//! zero so callers fill in only what they track.

use serde::{Deserialize, Serialize};

/// Flight distance class; per-mile factors differ by leg length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightLeg {
    /// Under 500 miles.
    Short,
    /// 500-1500 miles.
    Medium,
    /// Over 1500 miles.
    Long,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub miles: f64,
    pub leg: FlightLeg,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportInput {
    pub car_miles: f64,
    pub public_transit_miles: f64,
    pub bike_miles: f64,
    pub walk_miles: f64,
    pub flights: Vec<Flight>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyInput {
    pub electricity_kwh: f64,
    pub gas_therms: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInput {
    pub meat_meals: f64,
    pub vegetarian_meals: f64,
    pub vegan_meals: f64,
    /// 0-100; locally sourced food discounts the food total by up to 10%.
    pub local_food_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteInput {
    pub recycled_pounds: f64,
    pub composted_pounds: f64,
    pub waste_reduced_pounds: f64,
}
