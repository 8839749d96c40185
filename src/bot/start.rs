use std::sync::Arc;

use serenity::all::{Client, Context, EventHandler, GatewayIntents, Interaction, Message, Ready};
use serenity::async_trait;

use crate::bot::{handler, BotState};
use crate::command::Registry;
use crate::config::Config;
use crate::error::AppError;

/// Discord bot event handler
struct Handler {
    registry: Arc<Registry>,
    state: Arc<BotState>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        handler::ready::handle_ready(ctx, ready, &self.registry).await;
    }

    /// Called for every interaction; dispatches slash commands
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        handler::interaction::handle_interaction(ctx, interaction, &self.registry, &self.state)
            .await;
    }

    /// Called for every message; dispatches legacy prefixed commands
    async fn message(&self, ctx: Context, message: Message) {
        handler::message::handle_message(ctx, message, &self.registry, &self.state).await;
    }
}

/// Builds the Discord client with the configured token and intents.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `registry` - Immutable command registry built at startup
/// - `state` - Shared connection-manager state
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    registry: Arc<Registry>,
    state: Arc<BotState>,
) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler { registry, state };

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Blocks until the gateway connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
