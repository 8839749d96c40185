use super::*;
use sea_orm::PaginatorTrait;

/// Tests removing an existing connection.
///
/// Expected: Ok(true), row gone
#[tokio::test]
async fn removes_existing_connection() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db).guild_id(42).build().await.unwrap();

    let removed = manager.remove_connection(42).await?;

    assert!(removed);

    let remaining = entity::prelude::Connection::find()
        .count(db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests removing a connection that was never configured.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unconfigured_guild() -> Result<(), StorageError> {
    let (_test, manager) = setup().await;

    let removed = manager.remove_connection(42).await?;

    assert!(!removed);

    Ok(())
}

/// Tests that removal only touches the specified guild.
///
/// Expected: Ok(true) with the other guild's row intact
#[tokio::test]
async fn removes_only_specified_guild() -> Result<(), StorageError> {
    let (test, manager) = setup().await;
    let db = test.db.as_ref().unwrap();

    ConnectionFactory::new(db).guild_id(42).build().await.unwrap();
    ConnectionFactory::new(db).guild_id(43).build().await.unwrap();

    manager.remove_connection(42).await?;

    let remaining = entity::prelude::Connection::find()
        .all(db)
        .await
        .unwrap();

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].guild_id, 43);

    Ok(())
}
