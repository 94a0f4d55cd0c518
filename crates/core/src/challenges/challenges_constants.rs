//! Fixed seed set of challenges.
//!
//! Created on first access when no challenge data exists yet. Ids are
//! stable slugs referenced by the engagement mapping and by tests.

use chrono::{DateTime, Duration, Utc};

use super::challenges_model::{Challenge, ChallengeCadence};

pub const BIKE_WEEK_CHALLENGE: &str = "bike-to-work-week";
pub const ZERO_WASTE_CHALLENGE: &str = "zero-waste-day";
pub const PLANT_TREES_CHALLENGE: &str = "plant-ten-trees";
pub const MEAT_FREE_CHALLENGE: &str = "meat-free-week";
pub const ENERGY_SAVER_CHALLENGE: &str = "energy-saver";

/// The five predefined challenges, windowed from `now`. Each starts at
/// zero progress and incomplete.
pub fn default_challenges(now: DateTime<Utc>) -> Vec<Challenge> {
    let seed = |id: &str,
                title: &str,
                description: &str,
                cadence: ChallengeCadence,
                target: i64,
                unit: &str,
                points: i64,
                badge_id: &str,
                window: Duration| Challenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        cadence,
        target,
        current: 0,
        unit: unit.to_string(),
        points,
        badge_id: Some(badge_id.to_string()),
        start_date: now,
        end_date: now + window,
        completed: false,
    };

    vec![
        seed(
            BIKE_WEEK_CHALLENGE,
            "Bike to Work Week",
            "Use a bike instead of a car for 5 days this week",
            ChallengeCadence::Weekly,
            5,
            "days",
            100,
            "bike-warrior",
            Duration::days(7),
        ),
        seed(
            ZERO_WASTE_CHALLENGE,
            "Zero Waste Day",
            "Generate zero waste for one full day",
            ChallengeCadence::Daily,
            1,
            "day",
            50,
            "zero-waste",
            Duration::days(1),
        ),
        seed(
            PLANT_TREES_CHALLENGE,
            "Plant 10 Trees",
            "Plant 10 trees this month",
            ChallengeCadence::Monthly,
            10,
            "trees",
            200,
            "tree-planter",
            Duration::days(30),
        ),
        seed(
            MEAT_FREE_CHALLENGE,
            "Meat-Free Week",
            "Go vegetarian or vegan for 7 days",
            ChallengeCadence::Weekly,
            7,
            "days",
            150,
            "plant-power",
            Duration::days(7),
        ),
        seed(
            ENERGY_SAVER_CHALLENGE,
            "Energy Saver",
            "Reduce energy consumption by 20% this month",
            ChallengeCadence::Monthly,
            20,
            "%",
            175,
            "energy-saver",
            Duration::days(30),
        ),
    ]
}
