use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(pk_auto(Connection::Id))
                    .col(big_integer_uniq(Connection::GuildId))
                    .col(string(Connection::ApiUrl))
                    .col(string_null(Connection::CommandPrefix))
                    .col(timestamp_with_time_zone(Connection::LastUsed))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Connection {
    Table,
    Id,
    GuildId,
    ApiUrl,
    CommandPrefix,
    LastUsed,
}
