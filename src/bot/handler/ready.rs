use serenity::all::{ActivityData, Command as GlobalCommand, Context, Ready};

use crate::command::Registry;

/// Handles the ready event: logs the connection and registers the slash
/// schemas globally.
pub async fn handle_ready(ctx: Context, ready: Ready, registry: &Registry) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Linking Discord accounts")));

    match GlobalCommand::set_global_commands(&ctx.http, registry.schemas()).await {
        Ok(commands) => tracing::info!("Registered {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to register application commands: {e}"),
    }
}
