use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{exec_write, get_connection, DbPool};
use crate::kv::{self, BADGES_KEY};
use ecolog_core::badges::{Badge, BadgeRepositoryTrait};
use ecolog_core::errors::Result;
use ecolog_core::store::StoreValue;

pub struct BadgeRepository {
    pool: Arc<DbPool>,
}

impl BadgeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        BadgeRepository { pool }
    }
}

#[async_trait]
impl BadgeRepositoryTrait for BadgeRepository {
    fn load_earned(&self) -> Result<StoreValue<Vec<Badge>>> {
        let mut conn = get_connection(&self.pool)?;
        kv::read_document(&mut conn, BADGES_KEY)
    }

    async fn save_earned(&self, badges: Vec<Badge>) -> Result<()> {
        exec_write(self.pool.clone(), move |conn| {
            kv::write_document(conn, BADGES_KEY, &badges)
        })
        .await
    }
}
