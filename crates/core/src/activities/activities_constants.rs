//! Fixed catalog of loggable activity kinds.
//!
//! Point values and CO2 coefficients are static lookup data; the ledger
//! itself stores only the resulting title/points per entry.

use serde::{Deserialize, Serialize};

/// Broad grouping used for challenge mapping and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    Transport,
    Energy,
    Waste,
    Food,
    Planting,
    Cleanup,
    Other,
}

/// Every activity kind a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    BikeCommute,
    PublicTransit,
    CarPool,
    WorkFromHome,
    SolarPanel,
    LedBulb,
    Recycle,
    Compost,
    ReusableBag,
    WaterBottle,
    ReduceMeat,
    LocalFood,
    PlantTree,
    BeachCleanup,
    ParkCleanup,
    Other,
}

/// Catalog entry: display strings plus per-unit point and CO2 values.
#[derive(Debug, Clone, Copy)]
pub struct ActivityDetails {
    pub title: &'static str,
    pub description: &'static str,
    /// Points awarded per unit logged.
    pub points: i64,
    /// Kilograms of CO2 saved per unit logged.
    pub co2_per_unit: f64,
    /// Unit label, e.g. "miles" or "trees".
    pub unit: &'static str,
}

impl ActivityKind {
    pub fn category(self) -> ActivityCategory {
        match self {
            Self::BikeCommute | Self::PublicTransit | Self::CarPool | Self::WorkFromHome => {
                ActivityCategory::Transport
            }
            Self::SolarPanel | Self::LedBulb => ActivityCategory::Energy,
            Self::Recycle | Self::Compost | Self::ReusableBag | Self::WaterBottle => {
                ActivityCategory::Waste
            }
            Self::ReduceMeat | Self::LocalFood => ActivityCategory::Food,
            Self::PlantTree => ActivityCategory::Planting,
            Self::BeachCleanup | Self::ParkCleanup => ActivityCategory::Cleanup,
            Self::Other => ActivityCategory::Other,
        }
    }
}

/// Static per-kind details. CO2 coefficients follow EPA-style averages
/// (e.g. 0.411 kg/mile for an average car trip avoided, 22 kg/year per
/// planted tree).
pub fn activity_details(kind: ActivityKind) -> ActivityDetails {
    match kind {
        ActivityKind::BikeCommute => ActivityDetails {
            title: "Bike Commute",
            description: "Used bike instead of car",
            points: 20,
            co2_per_unit: 0.411,
            unit: "miles",
        },
        ActivityKind::PublicTransit => ActivityDetails {
            title: "Public Transit",
            description: "Used public transportation",
            points: 15,
            co2_per_unit: 0.234,
            unit: "miles",
        },
        ActivityKind::CarPool => ActivityDetails {
            title: "Car Pool",
            description: "Shared a ride",
            points: 10,
            co2_per_unit: 0.2,
            unit: "miles",
        },
        ActivityKind::WorkFromHome => ActivityDetails {
            title: "Work from Home",
            description: "Avoided commute",
            points: 25,
            co2_per_unit: 0.411,
            unit: "miles",
        },
        ActivityKind::SolarPanel => ActivityDetails {
            title: "Solar Energy",
            description: "Used solar power",
            points: 30,
            co2_per_unit: 0.429,
            unit: "kWh",
        },
        ActivityKind::LedBulb => ActivityDetails {
            title: "LED Bulb",
            description: "Replaced with LED",
            points: 5,
            co2_per_unit: 0.05,
            unit: "bulbs",
        },
        ActivityKind::Recycle => ActivityDetails {
            title: "Recycled",
            description: "Recycled materials",
            points: 10,
            co2_per_unit: 0.5,
            unit: "lbs",
        },
        ActivityKind::Compost => ActivityDetails {
            title: "Composted",
            description: "Composted organic waste",
            points: 8,
            co2_per_unit: 0.3,
            unit: "lbs",
        },
        ActivityKind::ReusableBag => ActivityDetails {
            title: "Reusable Bag",
            description: "Used reusable bag",
            points: 2,
            co2_per_unit: 0.01,
            unit: "bags",
        },
        ActivityKind::WaterBottle => ActivityDetails {
            title: "Reusable Bottle",
            description: "Used reusable water bottle",
            points: 3,
            co2_per_unit: 0.15,
            unit: "bottles",
        },
        ActivityKind::ReduceMeat => ActivityDetails {
            title: "Meat-Free Meal",
            description: "Ate vegetarian/vegan",
            points: 15,
            co2_per_unit: 2.6,
            unit: "meals",
        },
        ActivityKind::LocalFood => ActivityDetails {
            title: "Local Food",
            description: "Ate locally sourced food",
            points: 5,
            co2_per_unit: 0.1,
            unit: "meals",
        },
        ActivityKind::PlantTree => ActivityDetails {
            title: "Planted Tree",
            description: "Planted a tree",
            points: 50,
            co2_per_unit: 22.0,
            unit: "trees",
        },
        ActivityKind::BeachCleanup => ActivityDetails {
            title: "Beach Cleanup",
            description: "Cleaned up beach",
            points: 40,
            co2_per_unit: 5.0,
            unit: "hours",
        },
        ActivityKind::ParkCleanup => ActivityDetails {
            title: "Park Cleanup",
            description: "Cleaned up park",
            points: 35,
            co2_per_unit: 4.0,
            unit: "hours",
        },
        ActivityKind::Other => ActivityDetails {
            title: "Other Activity",
            description: "Other environmental activity",
            points: 10,
            co2_per_unit: 1.0,
            unit: "activities",
        },
    }
}
