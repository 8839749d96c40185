use super::*;

/// Tests repointing an existing connection at a new URL.
///
/// Expected: Ok(true), URL replaced, prefix preserved
#[tokio::test]
async fn updates_existing_connection() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://example.com/api/v2/")
        .command_prefix(Some("?".to_string()))
        .build()
        .await
        .unwrap();

    let updated = manager
        .update_connection(42, &url("https://moved.example.com/api/v2/"))
        .await?;

    assert!(updated);

    let row = entity::prelude::Connection::find()
        .filter(entity::connection::Column::GuildId.eq(42i64))
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.api_url, "https://moved.example.com/api/v2/");
    assert_eq!(row.command_prefix, Some("?".to_string()));

    Ok(())
}

/// Tests updating a connection that was never configured.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unconfigured_guild() -> Result<(), StorageError> {
    let (_test, manager) = setup().await;

    let updated = manager
        .update_connection(42, &url("https://example.com/api/v2/"))
        .await?;

    assert!(!updated);

    Ok(())
}
