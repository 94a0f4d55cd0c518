//! Static badge catalog.
//!
//! The earned set stores copies of these definitions stamped with an
//! earned date; the catalog itself is fixed and not user-configurable.

use super::badges_model::{Badge, BadgeRarity};

pub const BADGE_FIRST_STEPS: &str = "first-steps";
pub const BADGE_ECO_WARRIOR: &str = "eco-warrior";

struct BadgeSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    rarity: BadgeRarity,
}

const CATALOG: &[BadgeSpec] = &[
    BadgeSpec {
        id: BADGE_FIRST_STEPS,
        name: "First Steps",
        description: "Complete your first activity",
        icon: "🌱",
        rarity: BadgeRarity::Common,
    },
    BadgeSpec {
        id: "bike-warrior",
        name: "Bike Warrior",
        description: "Complete bike to work challenge",
        icon: "🚴",
        rarity: BadgeRarity::Rare,
    },
    BadgeSpec {
        id: "zero-waste",
        name: "Zero Waste Hero",
        description: "Complete zero waste day",
        icon: "♻️",
        rarity: BadgeRarity::Rare,
    },
    BadgeSpec {
        id: "tree-planter",
        name: "Tree Planter",
        description: "Plant 10 trees",
        icon: "🌳",
        rarity: BadgeRarity::Epic,
    },
    BadgeSpec {
        id: "plant-power",
        name: "Plant Power",
        description: "Complete meat-free week",
        icon: "🥗",
        rarity: BadgeRarity::Rare,
    },
    BadgeSpec {
        id: "energy-saver",
        name: "Energy Saver",
        description: "Reduce energy by 20%",
        icon: "⚡",
        rarity: BadgeRarity::Epic,
    },
    BadgeSpec {
        id: "carbon-neutral",
        name: "Carbon Neutral",
        description: "Achieve carbon neutral status",
        icon: "🌍",
        rarity: BadgeRarity::Legendary,
    },
    BadgeSpec {
        id: BADGE_ECO_WARRIOR,
        name: "Eco Warrior",
        description: "Reach 1000 points",
        icon: "🛡️",
        rarity: BadgeRarity::Epic,
    },
    BadgeSpec {
        id: "community-leader",
        name: "Community Leader",
        description: "Top 10 on leaderboard",
        icon: "👑",
        rarity: BadgeRarity::Legendary,
    },
];

/// Looks up a badge definition by id.
pub fn find_badge(badge_id: &str) -> Option<Badge> {
    CATALOG.iter().find(|spec| spec.id == badge_id).map(|spec| Badge {
        id: spec.id.to_string(),
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        icon: spec.icon.to_string(),
        rarity: spec.rarity,
        earned_date: None,
    })
}
