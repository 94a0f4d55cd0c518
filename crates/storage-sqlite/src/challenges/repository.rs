use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{exec_write, get_connection, DbPool};
use crate::kv::{self, CHALLENGES_KEY};
use ecolog_core::challenges::{Challenge, ChallengeRepositoryTrait};
use ecolog_core::errors::Result;
use ecolog_core::store::StoreValue;

pub struct ChallengeRepository {
    pool: Arc<DbPool>,
}

impl ChallengeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ChallengeRepository { pool }
    }
}

#[async_trait]
impl ChallengeRepositoryTrait for ChallengeRepository {
    fn load_challenges(&self) -> Result<StoreValue<Vec<Challenge>>> {
        let mut conn = get_connection(&self.pool)?;
        kv::read_document(&mut conn, CHALLENGES_KEY)
    }

    async fn save_challenges(&self, challenges: Vec<Challenge>) -> Result<()> {
        exec_write(self.pool.clone(), move |conn| {
            kv::write_document(conn, CHALLENGES_KEY, &challenges)
        })
        .await
    }
}
