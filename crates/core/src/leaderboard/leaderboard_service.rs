use std::sync::Arc;

use super::leaderboard_model::LeaderboardEntry;
use crate::activities::ActivityServiceTrait;
use crate::profile::ProfileServiceTrait;
use crate::Result;

/// Fixed seed competitors. The ranking is never persisted; it is
/// recomposed from these plus the live user aggregate on every read.
const SEED_COMPETITORS: &[(&str, &str, i64, i64)] = &[
    ("seed-1", "EcoWarrior2024", 1250, 45),
    ("seed-2", "GreenThumb", 980, 32),
    ("seed-3", "PlanetSaver", 875, 28),
    ("seed-4", "NatureLover", 720, 24),
    ("seed-5", "ClimateHero", 650, 20),
];

/// Pure composition: seeds plus the current user, sorted descending by
/// points. The sort is stable and the user is appended after the seeds,
/// so ties keep seed order with the user last among equals.
pub fn compose_leaderboard(current_user: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = SEED_COMPETITORS
        .iter()
        .map(|&(user_id, display_name, points, activity_count)| LeaderboardEntry {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            points,
            activity_count,
            is_current_user: false,
        })
        .collect();
    entries.push(current_user);
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}

/// Read-only view over the ledger aggregate and profile.
pub struct LeaderboardService {
    activity_service: Arc<dyn ActivityServiceTrait>,
    profile_service: Arc<dyn ProfileServiceTrait>,
}

impl LeaderboardService {
    pub fn new(
        activity_service: Arc<dyn ActivityServiceTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
    ) -> Self {
        Self {
            activity_service,
            profile_service,
        }
    }

    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let profile = self.profile_service.get_profile().await?;
        let totals = self.activity_service.get_totals()?;
        Ok(compose_leaderboard(LeaderboardEntry {
            user_id: profile.user_id,
            display_name: profile.display_name,
            points: totals.total_points,
            activity_count: totals.activity_count,
            is_current_user: true,
        }))
    }
}
