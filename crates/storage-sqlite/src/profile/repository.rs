use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{exec_write, get_connection, DbPool};
use crate::kv::{self, DISPLAY_NAME_KEY, USER_ID_KEY};
use ecolog_core::errors::Result;
use ecolog_core::profile::ProfileRepositoryTrait;
use ecolog_core::store::StoreValue;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ProfileRepository { pool }
    }
}

/// Id and name are raw strings, not JSON documents; any stored text is
/// valid, so these reads never surface `Corrupt`.
#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn load_user_id(&self) -> Result<StoreValue<String>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(match kv::read_raw(&mut conn, USER_ID_KEY)? {
            Some(value) => StoreValue::Present(value),
            None => StoreValue::Absent,
        })
    }

    async fn save_user_id(&self, user_id: &str) -> Result<()> {
        let user_id = user_id.to_string();
        exec_write(self.pool.clone(), move |conn| {
            kv::write_raw(conn, USER_ID_KEY, &user_id)
        })
        .await
    }

    fn load_display_name(&self) -> Result<StoreValue<String>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(match kv::read_raw(&mut conn, DISPLAY_NAME_KEY)? {
            Some(value) => StoreValue::Present(value),
            None => StoreValue::Absent,
        })
    }

    async fn save_display_name(&self, display_name: &str) -> Result<()> {
        let display_name = display_name.to_string();
        exec_write(self.pool.clone(), move |conn| {
            kv::write_raw(conn, DISPLAY_NAME_KEY, &display_name)
        })
        .await
    }
}
