use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Fixed single-guild deployment settings.
///
/// When present, the bot runs without a database and serves exactly one
/// guild through a `StatelessConnectionManager`.
pub struct StatelessConfig {
    pub guild_id: u64,
    pub api_url: Url,
}

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: Option<String>,
    pub default_command_prefix: String,
    pub stateless: Option<StatelessConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = require("DISCORD_BOT_TOKEN")?;

        let default_command_prefix = std::env::var("DEFAULT_COMMAND_PREFIX")
            .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string());

        let stateless = match (
            std::env::var("STATELESS_GUILD_ID"),
            std::env::var("STATELESS_API_URL"),
        ) {
            (Ok(guild_id), Ok(api_url)) => Some(StatelessConfig {
                guild_id: guild_id.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "STATELESS_GUILD_ID".to_string(),
                    reason: "expected a numeric guild id".to_string(),
                })?,
                api_url: Url::parse(&api_url).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "STATELESS_API_URL".to_string(),
                    reason: e.to_string(),
                })?,
            }),
            (Err(_), Err(_)) => None,
            _ => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "STATELESS_GUILD_ID".to_string(),
                    reason: "STATELESS_GUILD_ID and STATELESS_API_URL must be set together"
                        .to_string(),
                }
                .into())
            }
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if stateless.is_none() && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into());
        }

        Ok(Self {
            discord_bot_token,
            database_url,
            default_command_prefix,
            stateless,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
