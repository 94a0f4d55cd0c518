use std::sync::Arc;

use async_trait::async_trait;

use super::engagement_model::{LogActivityRequest, LoggedOutcome};
use crate::activities::{activity_details, ActivityCategory, ActivityKind, ActivityServiceTrait, NewActivity};
use crate::badges::BadgeServiceTrait;
use crate::challenges::{
    ChallengeServiceTrait, BIKE_WEEK_CHALLENGE, MEAT_FREE_CHALLENGE, PLANT_TREES_CHALLENGE,
    ZERO_WASTE_CHALLENGE,
};
use crate::errors::ValidationError;
use crate::opportunities::Opportunity;
use crate::Result;

/// High-level logging entry points used by the UI layer.
#[async_trait]
pub trait EngagementServiceTrait: Send + Sync {
    /// Logs a catalog activity: appends the ledger entry, pushes
    /// challenge progress, and re-evaluates badges.
    async fn log_activity(&self, request: LogActivityRequest) -> Result<LoggedOutcome>;

    /// Joins an opportunity, recording it as a ledger entry worth the
    /// opportunity's points.
    async fn join_opportunity(&self, opportunity: &Opportunity) -> Result<LoggedOutcome>;
}

/// Per-kind progress deltas for the activity-mapped challenges. Every
/// mapped challenge gets an entry even at zero so each log touches the
/// same challenge set in the same order.
fn challenge_deltas(kind: ActivityKind, amount: i64) -> [(&'static str, i64); 4] {
    let bike = i64::from(kind == ActivityKind::BikeCommute);
    let waste = i64::from(kind.category() == ActivityCategory::Waste);
    let trees = if kind == ActivityKind::PlantTree { amount } else { 0 };
    let meat_free = i64::from(kind == ActivityKind::ReduceMeat);
    [
        (BIKE_WEEK_CHALLENGE, bike),
        (ZERO_WASTE_CHALLENGE, waste),
        (PLANT_TREES_CHALLENGE, trees),
        (MEAT_FREE_CHALLENGE, meat_free),
    ]
}

pub struct EngagementService {
    activity_service: Arc<dyn ActivityServiceTrait>,
    challenge_service: Arc<dyn ChallengeServiceTrait>,
    badge_service: Arc<dyn BadgeServiceTrait>,
}

impl EngagementService {
    pub fn new(
        activity_service: Arc<dyn ActivityServiceTrait>,
        challenge_service: Arc<dyn ChallengeServiceTrait>,
        badge_service: Arc<dyn BadgeServiceTrait>,
    ) -> Self {
        Self {
            activity_service,
            challenge_service,
            badge_service,
        }
    }
}

#[async_trait]
impl EngagementServiceTrait for EngagementService {
    async fn log_activity(&self, request: LogActivityRequest) -> Result<LoggedOutcome> {
        if request.amount < 1 {
            return Err(ValidationError::InvalidInput(format!(
                "activity amount must be at least 1, got {}",
                request.amount
            ))
            .into());
        }

        let details = activity_details(request.kind);
        let title = format!("{} ({} {})", details.title, request.amount, details.unit);
        let description = request
            .note
            .unwrap_or_else(|| details.description.to_string());

        let activity = self
            .activity_service
            .log_activity(NewActivity {
                title,
                description,
                points: details.points * request.amount,
            })
            .await?;

        for (challenge_id, delta) in challenge_deltas(request.kind, request.amount) {
            self.challenge_service
                .record_progress(challenge_id, delta)
                .await?;
        }

        let new_badges = self.badge_service.evaluate().await;

        Ok(LoggedOutcome {
            activity,
            co2_saved_kg: details.co2_per_unit * request.amount as f64,
            new_badges,
        })
    }

    async fn join_opportunity(&self, opportunity: &Opportunity) -> Result<LoggedOutcome> {
        let activity = self
            .activity_service
            .log_activity(NewActivity {
                title: format!("Joined: {}", opportunity.title),
                description: opportunity.description.clone(),
                points: opportunity.points,
            })
            .await?;

        let new_badges = self.badge_service.evaluate().await;

        Ok(LoggedOutcome {
            activity,
            co2_saved_kg: 0.0,
            new_badges,
        })
    }
}
