mod api;
mod bot;
mod command;
mod config;
mod connections;
mod error;
mod model;
mod service;
mod startup;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::bot::BotState;
use crate::command::{verify::VerifyCommand, BotCommand, Registry};
use crate::config::Config;
use crate::connections::{
    ConnectionManager, StatelessConnectionManager, StorageConnectionManager,
};
use crate::error::{config::ConfigError, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nameless_link=info,serenity=warn".into()),
        )
        .init();

    let config = Config::from_env()?;
    let http = reqwest::Client::new();

    let connections: Arc<dyn ConnectionManager> = match &config.stateless {
        Some(stateless) => {
            tracing::info!(
                "Running in single-guild mode for guild {}",
                stateless.guild_id
            );
            Arc::new(StatelessConnectionManager::new(
                stateless.guild_id,
                stateless.api_url.clone(),
                http,
            ))
        }
        None => {
            let Some(database_url) = config.database_url.as_deref() else {
                return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into());
            };
            let db = startup::connect_to_database(database_url).await?;
            tracing::info!("Database connected, migrations applied");
            Arc::new(StorageConnectionManager::new(db, http))
        }
    };

    let commands: Vec<Arc<dyn BotCommand>> = vec![Arc::new(VerifyCommand)];
    let registry = Arc::new(Registry::build(commands)?);

    let state = Arc::new(BotState {
        connections,
        default_prefix: config.default_command_prefix.clone(),
    });

    let client = bot::start::init_bot(&config, registry, state).await?;

    bot::start::start_bot(client).await
}
