//! Per-guild website connections.
//!
//! A `ConnectionManager` associates Discord guilds with website API
//! endpoints. The storage-backed implementation persists the association in
//! the `connection` table; the stateless implementation serves single-tenant
//! deployments from one fixed pair with no database at all.

pub mod stateless;
pub mod storage;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::api::NamelessApi;
use crate::error::storage::StorageError;

pub use stateless::StatelessConnectionManager;
pub use storage::StorageConnectionManager;

/// Maps guild ids to website API endpoints.
///
/// Optional lookups return `Ok(None)` when nothing is configured; `Err` is
/// reserved for the storage failure classes in `StorageError`.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    /// Resolves the API handle for a guild, refreshing its last-used
    /// timestamp where the manager tracks one. `None` when the guild has no
    /// configured connection.
    async fn api(&self, guild_id: u64) -> Result<Option<Arc<NamelessApi>>, StorageError>;

    /// Registers a new guild connection. Fails with
    /// `StorageError::AlreadyExists` when the guild already has one.
    async fn new_connection(&self, guild_id: u64, api_url: &Url) -> Result<(), StorageError>;

    /// Removes a guild's connection. `false` when nothing was removed.
    async fn remove_connection(&self, guild_id: u64) -> Result<bool, StorageError>;

    /// Points an existing connection at a new URL. `false` when the guild
    /// has no connection.
    async fn update_connection(&self, guild_id: u64, api_url: &Url) -> Result<bool, StorageError>;

    /// When the guild's connection last resolved an API handle.
    async fn last_used(&self, guild_id: u64) -> Result<Option<DateTime<Utc>>, StorageError>;

    /// All configured API URLs.
    async fn list_connections(&self) -> Result<Vec<Url>, StorageError>;

    /// API URLs of connections last used strictly before `instant`.
    async fn list_connections_used_before(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError>;

    /// API URLs of connections last used at or after `instant`.
    async fn list_connections_used_since(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError>;

    /// Reverse lookup: the guild a URL is configured for.
    async fn guild_id_by_url(&self, api_url: &Url) -> Result<Option<u64>, StorageError>;

    /// The guild's configured command prefix for the legacy text path.
    async fn command_prefix(&self, guild_id: u64) -> Result<Option<String>, StorageError>;

    /// Whether mutating operations are supported.
    fn is_read_only(&self) -> bool {
        false
    }
}
