use chrono::{DateTime, Utc};
use url::Url;

use crate::error::storage::StorageError;

/// A guild's configured website connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Discord guild id (snowflake).
    pub guild_id: u64,
    /// Base URL of the guild's website API.
    pub api_url: Url,
    /// Per-guild command prefix for the legacy text path, if configured.
    pub command_prefix: Option<String>,
    /// When this connection last resolved an API handle.
    pub last_used: DateTime<Utc>,
}

impl TryFrom<entity::connection::Model> for Connection {
    type Error = StorageError;

    fn try_from(model: entity::connection::Model) -> Result<Self, Self::Error> {
        let api_url = Url::parse(&model.api_url).map_err(|source| StorageError::InvalidUrl {
            value: model.api_url.clone(),
            source,
        })?;

        Ok(Self {
            guild_id: model.guild_id as u64,
            api_url,
            command_prefix: model.command_prefix,
            last_used: model.last_used,
        })
    }
}
