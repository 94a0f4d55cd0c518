use serde::{Deserialize, Serialize};

/// One row in the composed ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub points: i64,
    pub activity_count: i64,
    /// True for the locally stored user, false for seed competitors.
    pub is_current_user: bool,
}
