use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, context::TestContext, factory::ConnectionFactory};
use url::Url;

use crate::connections::{ConnectionManager, StorageConnectionManager};
use crate::error::storage::StorageError;

mod get_api;
mod listings;
mod lookups;
mod new_connection;
mod remove_connection;
mod update_connection;

/// Builds an in-memory database with the connection table and a manager on
/// top of it. The context is returned alongside so tests can inspect rows
/// directly.
async fn setup() -> (TestContext, StorageConnectionManager) {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Connection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    (test, StorageConnectionManager::new(db, reqwest::Client::new()))
}

fn url(value: &str) -> Url {
    Url::parse(value).unwrap()
}
