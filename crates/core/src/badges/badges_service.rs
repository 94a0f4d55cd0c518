use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, warn};

use super::badges_constants::{find_badge, BADGE_ECO_WARRIOR, BADGE_FIRST_STEPS};
use super::badges_model::Badge;
use super::badges_traits::{BadgeRepositoryTrait, BadgeServiceTrait};
use crate::activities::ActivityServiceTrait;
use crate::challenges::ChallengeServiceTrait;
use crate::constants::ECO_WARRIOR_POINT_THRESHOLD;
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Rule scan over ledger totals and challenge completion state.
///
/// Run after any ledger or challenge mutation. Awards are append-only and
/// idempotent; nothing ever removes a badge from the earned set.
pub struct BadgeService {
    badge_repository: Arc<dyn BadgeRepositoryTrait>,
    activity_service: Arc<dyn ActivityServiceTrait>,
    challenge_service: Arc<dyn ChallengeServiceTrait>,
}

impl BadgeService {
    pub fn new(
        badge_repository: Arc<dyn BadgeRepositoryTrait>,
        activity_service: Arc<dyn ActivityServiceTrait>,
        challenge_service: Arc<dyn ChallengeServiceTrait>,
    ) -> Self {
        Self {
            badge_repository,
            activity_service,
            challenge_service,
        }
    }

    async fn evaluate_inner(&self) -> Result<Vec<String>> {
        let totals = self.activity_service.get_totals()?;
        let mut newly_awarded = Vec::new();

        if totals.activity_count >= 1 && self.award(BADGE_FIRST_STEPS).await? {
            newly_awarded.push(BADGE_FIRST_STEPS.to_string());
        }

        if totals.total_points >= ECO_WARRIOR_POINT_THRESHOLD
            && self.award(BADGE_ECO_WARRIOR).await?
        {
            newly_awarded.push(BADGE_ECO_WARRIOR.to_string());
        }

        for challenge in self.challenge_service.get_challenges().await? {
            if !challenge.completed {
                continue;
            }
            if let Some(badge_id) = &challenge.badge_id {
                if self.award(badge_id).await? {
                    newly_awarded.push(badge_id.clone());
                }
            }
        }

        Ok(newly_awarded)
    }
}

#[async_trait]
impl BadgeServiceTrait for BadgeService {
    fn get_earned_badges(&self) -> Result<Vec<Badge>> {
        match self.badge_repository.load_earned()? {
            StoreValue::Present(badges) => Ok(badges),
            StoreValue::Absent => Ok(Vec::new()),
            StoreValue::Corrupt => {
                warn!("stored badge set is unreadable; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn award(&self, badge_id: &str) -> Result<bool> {
        let mut earned = self.get_earned_badges()?;
        if earned.iter().any(|b| b.id == badge_id) {
            return Ok(false);
        }

        let Some(mut badge) = find_badge(badge_id) else {
            debug!("award for unknown badge '{badge_id}' ignored");
            return Ok(false);
        };

        badge.earned_date = Some(Utc::now());
        earned.push(badge);
        self.badge_repository.save_earned(earned).await?;
        Ok(true)
    }

    async fn evaluate(&self) -> Vec<String> {
        match self.evaluate_inner().await {
            Ok(newly_awarded) => newly_awarded,
            Err(e) => {
                error!("badge evaluation failed: {e}");
                Vec::new()
            }
        }
    }
}
