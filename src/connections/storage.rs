use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use url::Url;

use crate::api::NamelessApi;
use crate::connections::ConnectionManager;
use crate::error::storage::StorageError;
use crate::model::Connection;

/// Connection manager backed by the `connection` table.
///
/// API handles are rebuilt from the stored URL on every resolve, sharing one
/// `reqwest::Client` for connection pooling. Resolving a handle refreshes
/// the row's `last_used` timestamp.
pub struct StorageConnectionManager {
    db: DatabaseConnection,
    http: reqwest::Client,
}

impl StorageConnectionManager {
    pub fn new(db: DatabaseConnection, http: reqwest::Client) -> Self {
        Self { db, http }
    }

    async fn find_connection(&self, guild_id: u64) -> Result<Option<Connection>, StorageError> {
        let model = entity::prelude::Connection::find()
            .filter(entity::connection::Column::GuildId.eq(guild_id as i64))
            .one(&self.db)
            .await?;

        model.map(Connection::try_from).transpose()
    }

    async fn touch_last_used(&self, guild_id: u64) -> Result<(), StorageError> {
        entity::prelude::Connection::update_many()
            .col_expr(entity::connection::Column::LastUsed, Expr::value(Utc::now()))
            .filter(entity::connection::Column::GuildId.eq(guild_id as i64))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn list_urls_where(
        &self,
        filter: Option<sea_orm::sea_query::SimpleExpr>,
    ) -> Result<Vec<Url>, StorageError> {
        let mut query = entity::prelude::Connection::find();
        if let Some(filter) = filter {
            query = query.filter(filter);
        }

        let models = query.all(&self.db).await?;

        models
            .into_iter()
            .map(|model| Connection::try_from(model).map(|connection| connection.api_url))
            .collect()
    }
}

#[async_trait]
impl ConnectionManager for StorageConnectionManager {
    async fn api(&self, guild_id: u64) -> Result<Option<Arc<NamelessApi>>, StorageError> {
        let Some(connection) = self.find_connection(guild_id).await? else {
            return Ok(None);
        };

        self.touch_last_used(guild_id).await?;

        tracing::debug!(
            "Resolved connection for guild {} -> {}",
            connection.guild_id,
            connection.api_url
        );

        Ok(Some(Arc::new(NamelessApi::new(
            connection.api_url,
            self.http.clone(),
        ))))
    }

    async fn new_connection(&self, guild_id: u64, api_url: &Url) -> Result<(), StorageError> {
        let existing = entity::prelude::Connection::find()
            .filter(entity::connection::Column::GuildId.eq(guild_id as i64))
            .count(&self.db)
            .await?;
        if existing > 0 {
            return Err(StorageError::AlreadyExists(guild_id));
        }

        entity::connection::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            api_url: ActiveValue::Set(api_url.to_string()),
            command_prefix: ActiveValue::Set(None),
            last_used: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }

    async fn remove_connection(&self, guild_id: u64) -> Result<bool, StorageError> {
        let result = entity::prelude::Connection::delete_many()
            .filter(entity::connection::Column::GuildId.eq(guild_id as i64))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_connection(&self, guild_id: u64, api_url: &Url) -> Result<bool, StorageError> {
        let result = entity::prelude::Connection::update_many()
            .col_expr(
                entity::connection::Column::ApiUrl,
                Expr::value(api_url.to_string()),
            )
            .filter(entity::connection::Column::GuildId.eq(guild_id as i64))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn last_used(&self, guild_id: u64) -> Result<Option<DateTime<Utc>>, StorageError> {
        let connection = self.find_connection(guild_id).await?;

        Ok(connection.map(|connection| connection.last_used))
    }

    async fn list_connections(&self) -> Result<Vec<Url>, StorageError> {
        self.list_urls_where(None).await
    }

    async fn list_connections_used_before(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError> {
        self.list_urls_where(Some(entity::connection::Column::LastUsed.lt(instant)))
            .await
    }

    async fn list_connections_used_since(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<Vec<Url>, StorageError> {
        self.list_urls_where(Some(entity::connection::Column::LastUsed.gte(instant)))
            .await
    }

    async fn guild_id_by_url(&self, api_url: &Url) -> Result<Option<u64>, StorageError> {
        let model = entity::prelude::Connection::find()
            .filter(entity::connection::Column::ApiUrl.eq(api_url.as_str()))
            .one(&self.db)
            .await?;

        Ok(model.map(|model| model.guild_id as u64))
    }

    async fn command_prefix(&self, guild_id: u64) -> Result<Option<String>, StorageError> {
        let connection = self.find_connection(guild_id).await?;

        Ok(connection.and_then(|connection| connection.command_prefix))
    }
}
