use serde::{Deserialize, Serialize};

/// The single local user. The id is generated once and never changes; the
/// display name is user-editable and persisted independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
}
