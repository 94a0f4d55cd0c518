use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{exec_write, get_connection, DbPool};
use crate::kv::{self, ACTIVITIES_KEY, POINTS_KEY};
use ecolog_core::activities::{Activity, ActivityRepositoryTrait};
use ecolog_core::errors::Result;
use ecolog_core::store::StoreValue;

pub struct ActivityRepository {
    pool: Arc<DbPool>,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ActivityRepository { pool }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    fn load_activities(&self) -> Result<StoreValue<Vec<Activity>>> {
        let mut conn = get_connection(&self.pool)?;
        kv::read_document(&mut conn, ACTIVITIES_KEY)
    }

    fn load_total_points(&self) -> Result<StoreValue<i64>> {
        let mut conn = get_connection(&self.pool)?;
        kv::read_counter(&mut conn, POINTS_KEY)
    }

    async fn append_activity(&self, activity: Activity) -> Result<()> {
        exec_write(self.pool.clone(), move |conn| {
            // A corrupt or missing list restarts from this entry alone.
            let mut activities: Vec<Activity> =
                kv::read_document(conn, ACTIVITIES_KEY)?.unwrap_or(Vec::new());
            activities.push(activity);
            kv::write_document(conn, ACTIVITIES_KEY, &activities)
        })
        .await
    }

    async fn add_points(&self, delta: i64) -> Result<i64> {
        exec_write(self.pool.clone(), move |conn| {
            let total = kv::read_counter(conn, POINTS_KEY)?.unwrap_or(0) + delta;
            kv::write_counter(conn, POINTS_KEY, total)?;
            Ok(total)
        })
        .await
    }

    async fn reset(&self) -> Result<()> {
        exec_write(self.pool.clone(), |conn| {
            kv::delete_key(conn, ACTIVITIES_KEY)?;
            kv::delete_key(conn, POINTS_KEY)
        })
        .await
    }
}
