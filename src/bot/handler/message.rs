use serenity::all::{Context, Message};

use crate::bot::BotState;
use crate::command::{parse_invocation, CommandContext, Registry, GENERIC_FAILURE_REPLY};

/// Handles the legacy prefixed text-command path.
///
/// DMs use the process-wide default prefix; guild messages use the guild's
/// configured prefix when one exists. Unprefixed messages are ignored,
/// unknown command names get the help listing, and handler failures are
/// logged and answered with a generic reply.
pub async fn handle_message(ctx: Context, message: Message, registry: &Registry, state: &BotState) {
    if message.author.bot {
        return;
    }

    let context = match message.guild_id {
        Some(_) => CommandContext::GuildMessage,
        None => CommandContext::PrivateMessage,
    };

    let prefix = resolve_prefix(state, &message).await;

    let Some((name, args)) = parse_invocation(&message.content, &prefix) else {
        return;
    };

    let Some(handler) = registry.find(name, context) else {
        if let Err(e) = message.reply(&ctx.http, registry.help_listing(&prefix)).await {
            tracing::error!("Failed to send help listing: {e}");
        }
        return;
    };

    if let Err(e) = message.channel_id.broadcast_typing(&ctx.http).await {
        tracing::debug!("Failed to broadcast typing indicator: {e}");
    }

    tracing::info!(
        "User {} ({}) ran command {}",
        message.author.name,
        message.author.id,
        handler.label()
    );

    if let Err(e) = handler.run_text(&ctx, &message, &args, state).await {
        tracing::error!("Command {} failed: {e}", handler.label());

        if let Err(e) = message.reply(&ctx.http, GENERIC_FAILURE_REPLY).await {
            tracing::error!("Cannot send failure reply: {e}");
        }
    }
}

/// Resolves the active prefix for a message.
///
/// Storage failures fall back to the default prefix; prefix lookup must
/// never take the dispatch path down.
async fn resolve_prefix(state: &BotState, message: &Message) -> String {
    let Some(guild_id) = message.guild_id else {
        return state.default_prefix.clone();
    };

    match state.connections.command_prefix(guild_id.get()).await {
        Ok(Some(prefix)) => prefix,
        Ok(None) => state.default_prefix.clone(),
        Err(e) => {
            tracing::warn!("Failed to look up command prefix for guild {guild_id}: {e}");
            state.default_prefix.clone()
        }
    }
}
