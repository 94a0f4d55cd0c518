use serde::{Deserialize, Serialize};

use crate::activities::{Activity, ActivityKind};

/// What the user logs: a catalog kind, how many units, and an optional
/// free-form note that replaces the catalog description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogActivityRequest {
    pub kind: ActivityKind,
    /// Unit count; points and CO2 scale linearly with it.
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything one logging call produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedOutcome {
    pub activity: Activity,
    pub co2_saved_kg: f64,
    /// Badge ids newly earned as a result of this entry.
    pub new_badges: Vec<String>,
}
