use super::*;

/// Tests registering a connection for a guild without one.
///
/// Expected: Ok, row persisted with the given URL and no prefix
#[tokio::test]
async fn registers_new_connection() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    manager
        .new_connection(42, &url("https://example.com/api/v2/"))
        .await?;

    let row = entity::prelude::Connection::find()
        .filter(entity::connection::Column::GuildId.eq(42i64))
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.api_url, "https://example.com/api/v2/");
    assert!(row.command_prefix.is_none());

    Ok(())
}

/// Tests registering a connection for a guild that already has one.
///
/// Expected: Err(AlreadyExists) carrying the guild id, existing row kept
#[tokio::test]
async fn rejects_duplicate_guild() {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://example.com/api/v2/")
        .build()
        .await
        .unwrap();

    let result = manager
        .new_connection(42, &url("https://other.example.com/api/v2/"))
        .await;

    assert!(matches!(result, Err(StorageError::AlreadyExists(42))));
}
