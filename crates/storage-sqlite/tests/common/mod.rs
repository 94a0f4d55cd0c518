use std::sync::Arc;

use diesel::prelude::*;
use tempfile::TempDir;

use ecolog_storage_sqlite::db;
use ecolog_storage_sqlite::DbPool;

/// Fresh migrated database in a temp directory. The directory is removed
/// when the returned guard drops.
pub fn setup_db() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = db::init(dir.path().to_str().expect("temp path is not utf-8"))
        .expect("failed to initialize database");
    let pool = db::create_pool(&db_path).expect("failed to create pool");
    db::run_migrations(&pool).expect("failed to run migrations");
    (dir, pool)
}

/// Overwrites one store key with arbitrary text, bypassing the typed
/// write path. Used to simulate corrupted persisted documents.
pub fn poison_key(pool: &DbPool, key: &str, text: &str) {
    let mut conn = pool.get().expect("failed to get connection");
    diesel::sql_query("REPLACE INTO app_store (store_key, store_value) VALUES (?, ?)")
        .bind::<diesel::sql_types::Text, _>(key)
        .bind::<diesel::sql_types::Text, _>(text)
        .execute(&mut conn)
        .expect("failed to poison key");
}

/// Reads the raw stored text for a key, if present.
pub fn raw_value(pool: &DbPool, key: &str) -> Option<String> {
    use diesel::sql_types::Text;

    #[derive(QueryableByName)]
    struct Row {
        #[diesel(sql_type = Text)]
        store_value: String,
    }

    let mut conn = pool.get().expect("failed to get connection");
    diesel::sql_query("SELECT store_value FROM app_store WHERE store_key = ?")
        .bind::<Text, _>(key)
        .load::<Row>(&mut conn)
        .expect("failed to read raw value")
        .into_iter()
        .next()
        .map(|row| row.store_value)
}
