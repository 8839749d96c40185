//! Connection factory for creating test connection entities.
//!
//! Provides factory methods for creating guild connection rows with sensible
//! defaults, reducing boilerplate in tests. Supports customization through a
//! builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild connections with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::connection::ConnectionFactory;
///
/// let connection = ConnectionFactory::new(&db)
///     .guild_id(42)
///     .api_url("https://example.com/api/v2")
///     .build()
///     .await?;
/// ```
pub struct ConnectionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    api_url: String,
    command_prefix: Option<String>,
    last_used: DateTime<Utc>,
}

impl<'a> ConnectionFactory<'a> {
    /// Creates a new ConnectionFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - api_url: `"https://site-{id}.example.com/api/v2"`
    /// - command_prefix: `None`
    /// - last_used: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id,
            api_url: format!("https://site-{}.example.com/api/v2", id),
            command_prefix: None,
            last_used: Utc::now(),
        }
    }

    /// Sets the guild id.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the stored API base URL.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the per-guild command prefix.
    pub fn command_prefix(mut self, command_prefix: Option<String>) -> Self {
        self.command_prefix = command_prefix;
        self
    }

    /// Sets the last-used timestamp.
    pub fn last_used(mut self, last_used: DateTime<Utc>) -> Self {
        self.last_used = last_used;
        self
    }

    /// Builds and inserts the connection entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::connection::Model)` - Created connection entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::connection::Model, DbErr> {
        entity::connection::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            api_url: ActiveValue::Set(self.api_url),
            command_prefix: ActiveValue::Set(self.command_prefix),
            last_used: ActiveValue::Set(self.last_used),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a connection with default values.
///
/// Shorthand for `ConnectionFactory::new(db).build().await`.
pub async fn create_connection(
    db: &DatabaseConnection,
) -> Result<entity::connection::Model, DbErr> {
    ConnectionFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_connection_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Connection)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let connection = create_connection(db).await?;

        assert!(connection.guild_id > 0);
        assert!(!connection.api_url.is_empty());
        assert!(connection.command_prefix.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_connection_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Connection)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let connection = ConnectionFactory::new(db)
            .guild_id(987654321)
            .api_url("https://custom.example.com/api/v2")
            .command_prefix(Some("?".to_string()))
            .build()
            .await?;

        assert_eq!(connection.guild_id, 987654321);
        assert_eq!(connection.api_url, "https://custom.example.com/api/v2");
        assert_eq!(connection.command_prefix, Some("?".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_connections() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Connection)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_connection(db).await?;
        let second = create_connection(db).await?;

        assert_ne!(first.guild_id, second.guild_id);
        assert_ne!(first.api_url, second.api_url);

        Ok(())
    }
}
