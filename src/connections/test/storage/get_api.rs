use super::*;

/// Tests resolving an API handle for a configured guild.
///
/// Expected: Some handle backed by the stored URL
#[tokio::test]
async fn resolves_api_for_configured_guild() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://example.com/api/v2/")
        .build()
        .await
        .unwrap();

    let api = manager.api(42).await?;

    assert_eq!(
        api.unwrap().api_url().as_str(),
        "https://example.com/api/v2/"
    );

    Ok(())
}

/// Tests resolving an API handle for a guild with no connection.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), StorageError> {
    let (_test, manager) = setup().await;

    let api = manager.api(42).await?;

    assert!(api.is_none());

    Ok(())
}

/// Tests that resolving a handle refreshes the last-used timestamp.
///
/// Expected: last_used moves forward from the seeded value
#[tokio::test]
async fn refreshes_last_used_on_resolve() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    let old = Utc::now() - chrono::Duration::hours(2);
    ConnectionFactory::new(db)
        .guild_id(42)
        .last_used(old)
        .build()
        .await
        .unwrap();

    manager.api(42).await?;

    let row = entity::prelude::Connection::find()
        .filter(entity::connection::Column::GuildId.eq(42i64))
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert!(row.last_used > old);

    Ok(())
}

/// Tests that a stored URL that no longer parses surfaces as a storage
/// error instead of a handle.
///
/// Expected: Err(InvalidUrl)
#[tokio::test]
async fn surfaces_invalid_stored_url() {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("not a url")
        .build()
        .await
        .unwrap();

    let result = manager.api(42).await;

    assert!(matches!(result, Err(StorageError::InvalidUrl { .. })));
}
