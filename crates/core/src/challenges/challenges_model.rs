//! Challenge tracker domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cadence classifier. Informational only: it labels the challenge for
/// display and never drives any scheduling logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCadence {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// Derived lifecycle state. Only `completed` is stored; expiry is computed
/// against the wall clock at read time and never written back, so an
/// expired challenge still accepts progress and can complete late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    Active,
    Completed,
    Expired,
}

/// A time-boxed target with incremental progress and a point/badge reward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cadence: ChallengeCadence,
    pub target: i64,
    pub current: i64,
    pub unit: String,
    pub points: i64,
    /// Badge awarded on completion, when the challenge names one.
    pub badge_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub completed: bool,
}

impl Challenge {
    /// Lifecycle state as of `now`. Completion wins over expiry.
    pub fn status_at(&self, now: DateTime<Utc>) -> ChallengeStatus {
        if self.completed {
            ChallengeStatus::Completed
        } else if now > self.end_date {
            ChallengeStatus::Expired
        } else {
            ChallengeStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn challenge(current: i64, completed: bool, ends_in_hours: i64) -> Challenge {
        let now = Utc::now();
        Challenge {
            id: "c".to_string(),
            title: "t".to_string(),
            description: String::new(),
            cadence: ChallengeCadence::Weekly,
            target: 5,
            current,
            unit: "days".to_string(),
            points: 100,
            badge_id: None,
            start_date: now,
            end_date: now + Duration::hours(ends_in_hours),
            completed,
        }
    }

    #[test]
    fn status_reflects_clock_and_completion() {
        let now = Utc::now();
        assert_eq!(challenge(1, false, 24).status_at(now), ChallengeStatus::Active);
        assert_eq!(challenge(1, false, -1).status_at(now), ChallengeStatus::Expired);
        assert_eq!(challenge(5, true, -1).status_at(now), ChallengeStatus::Completed);
    }
}
