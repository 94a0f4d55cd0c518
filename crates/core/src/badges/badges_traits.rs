use super::badges_model::Badge;
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Trait for earned-badge storage.
#[async_trait]
pub trait BadgeRepositoryTrait: Send + Sync {
    fn load_earned(&self) -> Result<StoreValue<Vec<Badge>>>;
    async fn save_earned(&self, badges: Vec<Badge>) -> Result<()>;
}

/// Trait for badge evaluation and awarding.
#[async_trait]
pub trait BadgeServiceTrait: Send + Sync {
    /// All badges earned so far; corrupt storage reads as empty.
    fn get_earned_badges(&self) -> Result<Vec<Badge>>;

    /// Adds a badge to the earned set. Idempotent: an already-earned id
    /// keeps its original timestamp and this returns `false`. Ids missing
    /// from the catalog are ignored.
    async fn award(&self, badge_id: &str) -> Result<bool>;

    /// Re-scans ledger totals and challenge completion and awards every
    /// newly qualifying badge. Returns the newly awarded ids. Never fails
    /// outward: internal errors are logged and leave state unchanged.
    async fn evaluate(&self) -> Vec<String>;
}
