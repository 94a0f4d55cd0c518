use super::challenges_model::Challenge;
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Trait for challenge storage. The whole set is stored as one document
/// and always written back in full.
#[async_trait]
pub trait ChallengeRepositoryTrait: Send + Sync {
    fn load_challenges(&self) -> Result<StoreValue<Vec<Challenge>>>;
    async fn save_challenges(&self, challenges: Vec<Challenge>) -> Result<()>;
}

/// Trait for challenge tracker operations.
#[async_trait]
pub trait ChallengeServiceTrait: Send + Sync {
    /// Returns all challenges, seeding the fixed template set on first
    /// access. A corrupt stored set reads as a fresh default set without
    /// being rewritten.
    async fn get_challenges(&self) -> Result<Vec<Challenge>>;

    /// Applies a progress delta to one challenge and persists the whole
    /// set. Unknown ids are ignored. A zero delta still persists.
    async fn record_progress(&self, challenge_id: &str, delta: i64) -> Result<()>;
}
