use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};

use super::challenges_constants::default_challenges;
use super::challenges_model::Challenge;
use super::challenges_traits::{ChallengeRepositoryTrait, ChallengeServiceTrait};
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Service for fixed-target challenges with incremental progress.
///
/// Progress is clamped to `[0, target]` and `completed` is recomputed from
/// the clamped value on every mutation, so the two can never disagree.
/// Expiry is a read-time view (`Challenge::status_at`), never stored:
/// a challenge past its end date still accepts progress and completes
/// late.
pub struct ChallengeService {
    challenge_repository: Arc<dyn ChallengeRepositoryTrait>,
}

impl ChallengeService {
    pub fn new(challenge_repository: Arc<dyn ChallengeRepositoryTrait>) -> Self {
        Self {
            challenge_repository,
        }
    }
}

#[async_trait]
impl ChallengeServiceTrait for ChallengeService {
    async fn get_challenges(&self) -> Result<Vec<Challenge>> {
        match self.challenge_repository.load_challenges()? {
            StoreValue::Present(challenges) => Ok(challenges),
            StoreValue::Absent => {
                let seeded = default_challenges(Utc::now());
                self.challenge_repository
                    .save_challenges(seeded.clone())
                    .await?;
                Ok(seeded)
            }
            StoreValue::Corrupt => {
                // Serve defaults for reading but leave the stored bytes
                // alone; the next successful save replaces them.
                warn!("stored challenge set is unreadable; serving defaults");
                Ok(default_challenges(Utc::now()))
            }
        }
    }

    async fn record_progress(&self, challenge_id: &str, delta: i64) -> Result<()> {
        let mut challenges = self.get_challenges().await?;

        let Some(challenge) = challenges.iter_mut().find(|c| c.id == challenge_id) else {
            debug!("progress for unknown challenge '{challenge_id}' ignored");
            return Ok(());
        };

        challenge.current = (challenge.current + delta).clamp(0, challenge.target);
        challenge.completed = challenge.current >= challenge.target;

        self.challenge_repository.save_challenges(challenges).await
    }
}
