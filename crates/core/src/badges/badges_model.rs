//! Badge domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rarity classifier. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A permanent achievement marker. `earned_date` is set when the badge
/// enters the earned set; catalog definitions carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: BadgeRarity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_date: Option<DateTime<Utc>>,
}
