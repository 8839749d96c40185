use super::*;

/// Tests the reverse lookup from URL to guild id.
///
/// Expected: Some(guild id) for a stored URL, None otherwise
#[tokio::test]
async fn finds_guild_by_url() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://example.com/api/v2/")
        .build()
        .await
        .unwrap();

    let guild_id = manager
        .guild_id_by_url(&url("https://example.com/api/v2/"))
        .await?;
    assert_eq!(guild_id, Some(42));

    let unknown = manager
        .guild_id_by_url(&url("https://other.example.com/api/v2/"))
        .await?;
    assert!(unknown.is_none());

    Ok(())
}

/// Tests the per-guild prefix lookup.
///
/// Expected: Some(prefix) when configured, None when unset or unconfigured
#[tokio::test]
async fn returns_configured_prefix() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .command_prefix(Some("?".to_string()))
        .build()
        .await
        .unwrap();
    ConnectionFactory::new(db).guild_id(43).build().await.unwrap();

    assert_eq!(manager.command_prefix(42).await?.as_deref(), Some("?"));
    assert!(manager.command_prefix(43).await?.is_none());
    assert!(manager.command_prefix(44).await?.is_none());

    Ok(())
}

/// Tests the last-used lookup.
///
/// Expected: the seeded timestamp for a configured guild, None otherwise
#[tokio::test]
async fn returns_last_used_timestamp() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    let seeded = Utc::now() - chrono::Duration::hours(2);
    ConnectionFactory::new(db)
        .guild_id(42)
        .last_used(seeded)
        .build()
        .await
        .unwrap();

    let last_used = manager.last_used(42).await?.unwrap();
    let drift = (last_used - seeded).num_seconds().abs();
    assert!(drift < 2);

    assert!(manager.last_used(7).await?.is_none());

    Ok(())
}
