use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

/// Trait for profile storage. Id and display name live under separate
/// keys and are read/written independently.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn load_user_id(&self) -> Result<StoreValue<String>>;
    async fn save_user_id(&self, user_id: &str) -> Result<()>;
    fn load_display_name(&self) -> Result<StoreValue<String>>;
    async fn save_display_name(&self, display_name: &str) -> Result<()>;
}

/// Trait for profile operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Returns the stored user id, generating and persisting one on first
    /// call.
    async fn get_or_create_user_id(&self) -> Result<String>;

    /// Display name, falling back to the default when unset.
    fn get_display_name(&self) -> Result<String>;

    async fn set_display_name(&self, display_name: &str) -> Result<()>;

    async fn get_profile(&self) -> Result<crate::profile::UserProfile>;
}
