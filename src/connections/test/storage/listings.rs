use super::*;

/// Tests listing every configured URL.
///
/// Expected: both seeded URLs, nothing else
#[tokio::test]
async fn lists_all_connection_urls() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://one.example.com/api/v2/")
        .build()
        .await
        .unwrap();
    ConnectionFactory::new(db)
        .guild_id(43)
        .api_url("https://two.example.com/api/v2/")
        .build()
        .await
        .unwrap();

    let urls = manager.list_connections().await?;

    assert_eq!(urls.len(), 2);
    assert!(urls.contains(&url("https://one.example.com/api/v2/")));
    assert!(urls.contains(&url("https://two.example.com/api/v2/")));

    Ok(())
}

/// Tests the empty listing.
///
/// Expected: Ok with no URLs
#[tokio::test]
async fn lists_nothing_without_connections() -> Result<(), StorageError> {
    let (_test, manager) = setup().await;

    assert!(manager.list_connections().await?.is_empty());

    Ok(())
}

/// Tests splitting connections by last-used time.
///
/// One connection last used three hours ago, one just now; the cut is one
/// hour ago.
///
/// Expected: the stale URL before the cut, the fresh URL since the cut
#[tokio::test]
async fn splits_connections_at_the_cutoff() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db)
        .guild_id(42)
        .api_url("https://stale.example.com/api/v2/")
        .last_used(Utc::now() - chrono::Duration::hours(3))
        .build()
        .await
        .unwrap();
    ConnectionFactory::new(db)
        .guild_id(43)
        .api_url("https://fresh.example.com/api/v2/")
        .build()
        .await
        .unwrap();

    let cutoff = Utc::now() - chrono::Duration::hours(1);

    let before = manager.list_connections_used_before(cutoff).await?;
    assert_eq!(before, vec![url("https://stale.example.com/api/v2/")]);

    let since = manager.list_connections_used_since(cutoff).await?;
    assert_eq!(since, vec![url("https://fresh.example.com/api/v2/")]);

    Ok(())
}
