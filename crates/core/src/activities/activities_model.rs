//! Activity ledger domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged action that awarded points.
///
/// Entries are immutable once created and are only ever removed by a bulk
/// reset of the whole ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: i64,
    pub date: DateTime<Utc>,
}

/// Input model for appending a ledger entry. Id and timestamp are assigned
/// by the service at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub title: String,
    pub description: String,
    pub points: i64,
}

/// Derived aggregate over the ledger: the running point counter plus the
/// stored entry count. `total_points` is read from its own key, not
/// re-summed from the list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTotals {
    pub total_points: i64,
    pub activity_count: i64,
}
