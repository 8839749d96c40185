use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::api::NamelessApi;
use crate::connections::ConnectionManager;
use crate::error::storage::StorageError;

/// Read-only connection manager holding exactly one guild/URL pair.
///
/// Used for single-tenant deployments that configure the bot entirely from
/// the environment: no database, no mutations, no usage tracking. The API
/// handle is built once at construction and reused.
pub struct StatelessConnectionManager {
    guild_id: u64,
    api_url: Url,
    api: Arc<NamelessApi>,
}

impl StatelessConnectionManager {
    pub fn new(guild_id: u64, api_url: Url, http: reqwest::Client) -> Self {
        let api = Arc::new(NamelessApi::new(api_url.clone(), http));

        Self {
            guild_id,
            api_url,
            api,
        }
    }
}

#[async_trait]
impl ConnectionManager for StatelessConnectionManager {
    async fn api(&self, guild_id: u64) -> Result<Option<Arc<NamelessApi>>, StorageError> {
        if guild_id != self.guild_id {
            return Ok(None);
        }

        Ok(Some(self.api.clone()))
    }

    async fn new_connection(&self, _guild_id: u64, _api_url: &Url) -> Result<(), StorageError> {
        Err(StorageError::Unsupported("new_connection"))
    }

    async fn remove_connection(&self, _guild_id: u64) -> Result<bool, StorageError> {
        Err(StorageError::Unsupported("remove_connection"))
    }

    async fn update_connection(&self, _guild_id: u64, _api_url: &Url) -> Result<bool, StorageError> {
        Err(StorageError::Unsupported("update_connection"))
    }

    async fn last_used(&self, _guild_id: u64) -> Result<Option<DateTime<Utc>>, StorageError> {
        Err(StorageError::Unsupported("last_used"))
    }

    async fn list_connections(&self) -> Result<Vec<Url>, StorageError> {
        Ok(vec![self.api.api_url().clone()])
    }

    async fn list_connections_used_before(
        &self,
        _instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError> {
        Err(StorageError::Unsupported("list_connections_used_before"))
    }

    async fn list_connections_used_since(
        &self,
        _instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError> {
        Err(StorageError::Unsupported("list_connections_used_since"))
    }

    async fn guild_id_by_url(&self, api_url: &Url) -> Result<Option<u64>, StorageError> {
        if *api_url != self.api_url {
            // The single pair is the entire lookup table; anything else is a
            // query this manager cannot answer.
            return Err(StorageError::Unsupported("guild_id_by_url"));
        }

        Ok(Some(self.guild_id))
    }

    async fn command_prefix(&self, _guild_id: u64) -> Result<Option<String>, StorageError> {
        // Single-tenant deployments use the process-wide default prefix.
        Ok(None)
    }

    fn is_read_only(&self) -> bool {
        true
    }
}
