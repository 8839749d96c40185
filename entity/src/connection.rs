use sea_orm::entity::prelude::*;

/// A guild's link to a website API endpoint.
///
/// `guild_id` is the Discord snowflake stored as i64 (SQLite has no unsigned
/// 64-bit column type). `last_used` is refreshed every time the connection is
/// read to resolve an API handle.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "connection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: i64,
    pub api_url: String,
    pub command_prefix: Option<String>,
    pub last_used: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
