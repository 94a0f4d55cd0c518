use super::activities_model::{Activity, ActivityTotals, NewActivity};
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for activity ledger storage.
///
/// The list and the running counter live under separate keys. `append` and
/// `add_points` are distinct writes on purpose: they stay independent
/// storage operations, and a crash between them leaves the counter
/// detectably out of sync with the list (see the service docs).
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Reads the stored entry list.
    fn load_activities(&self) -> Result<StoreValue<Vec<Activity>>>;

    /// Reads the running point counter.
    fn load_total_points(&self) -> Result<StoreValue<i64>>;

    /// Appends one entry to the stored list. A corrupt or absent stored
    /// list is replaced by a fresh list containing only this entry.
    async fn append_activity(&self, activity: Activity) -> Result<()>;

    /// Adds `delta` to the running counter and returns the new total. A
    /// corrupt or absent counter is treated as zero before the add.
    async fn add_points(&self, delta: i64) -> Result<i64>;

    /// Clears both the list and the counter.
    async fn reset(&self) -> Result<()>;
}

/// Trait defining the contract for activity ledger operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    /// All entries in insertion order (oldest first). A corrupt stored
    /// list reads as empty; storage is not rewritten.
    fn get_activities(&self) -> Result<Vec<Activity>>;

    /// O(1) read of the running counter; absent or corrupt reads as zero.
    fn get_total_points(&self) -> Result<i64>;

    /// Counter plus entry count in one call.
    fn get_totals(&self) -> Result<ActivityTotals>;

    /// Validates, stamps, appends, and bumps the counter. Returns the
    /// stored entry.
    async fn log_activity(&self, new_activity: NewActivity) -> Result<Activity>;

    /// Irreversibly clears the ledger and the counter.
    async fn reset(&self) -> Result<()>;
}
