use std::sync::Arc;

use log::warn;
use uuid::Uuid;

use super::profile_model::UserProfile;
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::constants::DEFAULT_DISPLAY_NAME;
use crate::store::StoreValue;
use crate::Result;
use async_trait::async_trait;

pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn get_or_create_user_id(&self) -> Result<String> {
        match self.profile_repository.load_user_id()? {
            StoreValue::Present(user_id) => Ok(user_id),
            StoreValue::Absent | StoreValue::Corrupt => {
                let user_id = Uuid::new_v4().to_string();
                self.profile_repository.save_user_id(&user_id).await?;
                Ok(user_id)
            }
        }
    }

    fn get_display_name(&self) -> Result<String> {
        match self.profile_repository.load_display_name()? {
            StoreValue::Present(name) if !name.is_empty() => Ok(name),
            StoreValue::Present(_) | StoreValue::Absent => Ok(DEFAULT_DISPLAY_NAME.to_string()),
            StoreValue::Corrupt => {
                warn!("stored display name is unreadable; using default");
                Ok(DEFAULT_DISPLAY_NAME.to_string())
            }
        }
    }

    async fn set_display_name(&self, display_name: &str) -> Result<()> {
        self.profile_repository.save_display_name(display_name).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            user_id: self.get_or_create_user_id().await?,
            display_name: self.get_display_name()?,
        })
    }
}
