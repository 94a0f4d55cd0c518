use std::sync::Arc;

use chrono::Utc;
use log::warn;
use uuid::Uuid;

use super::activities_model::{Activity, ActivityTotals, NewActivity};
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::store::StoreValue;
use async_trait::async_trait;

/// Service for the append-only activity ledger.
///
/// The running point counter is stored under its own key rather than
/// re-summed from the list, so reads stay O(1). The two keys are written
/// sequentially, not atomically: a failure between `append_activity` and
/// `add_points` leaves the counter short of the list sum. That divergence
/// is recoverable (re-sum the list) and detectable, and is accepted as a
/// known limitation of the flat key-value layout.
pub struct ActivityService {
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    pub fn new(activity_repository: Arc<dyn ActivityRepositoryTrait>) -> Self {
        Self {
            activity_repository,
        }
    }
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    fn get_activities(&self) -> Result<Vec<Activity>> {
        match self.activity_repository.load_activities()? {
            StoreValue::Present(activities) => Ok(activities),
            StoreValue::Absent => Ok(Vec::new()),
            StoreValue::Corrupt => {
                warn!("stored activity list is unreadable; treating ledger as empty");
                Ok(Vec::new())
            }
        }
    }

    fn get_total_points(&self) -> Result<i64> {
        match self.activity_repository.load_total_points()? {
            StoreValue::Present(points) => Ok(points),
            StoreValue::Absent => Ok(0),
            StoreValue::Corrupt => {
                warn!("stored point counter is unreadable; reading as zero");
                Ok(0)
            }
        }
    }

    fn get_totals(&self) -> Result<ActivityTotals> {
        Ok(ActivityTotals {
            total_points: self.get_total_points()?,
            activity_count: self.get_activities()?.len() as i64,
        })
    }

    async fn log_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        if new_activity.points < 0 {
            return Err(ValidationError::NegativeValue {
                field: "points".to_string(),
                value: new_activity.points,
            }
            .into());
        }

        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            title: new_activity.title,
            description: new_activity.description,
            points: new_activity.points,
            date: Utc::now(),
        };

        self.activity_repository
            .append_activity(activity.clone())
            .await?;
        self.activity_repository
            .add_points(activity.points)
            .await?;

        Ok(activity)
    }

    async fn reset(&self) -> Result<()> {
        self.activity_repository.reset().await
    }
}
