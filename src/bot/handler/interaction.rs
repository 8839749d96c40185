use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::BotState;
use crate::command::{CommandContext, Registry, GENERIC_FAILURE_REPLY};

const UNAVAILABLE_HERE_REPLY: &str = "That command is not available here.";

/// Handles slash-command interactions.
///
/// Resolves the command by name under the interaction's context, defers the
/// response, and runs the handler. Handler failures are logged and answered
/// with a generic reply; the event task never dies.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Interaction,
    registry: &Registry,
    state: &BotState,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let context = if command.guild_id.is_some() {
        CommandContext::GuildMessage
    } else {
        CommandContext::PrivateMessage
    };

    let Some(handler) = registry.find(&command.data.name, context) else {
        // Either a stale registration or a guild-only command invoked from a
        // DM. Answer immediately; there is nothing to defer.
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(UNAVAILABLE_HERE_REPLY),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Cannot respond to slash command: {e}");
        }
        return;
    };

    if let Err(e) = command.defer(&ctx.http).await {
        tracing::error!("Failed to defer interaction: {e}");
        return;
    }

    tracing::info!(
        "User {} ({}) ran command {}",
        command.user.name,
        command.user.id,
        handler.label()
    );

    if let Err(e) = handler.run_slash(&ctx, &command, state).await {
        tracing::error!("Command {} failed: {e}", handler.label());

        let followup = CreateInteractionResponseFollowup::new().content(GENERIC_FAILURE_REPLY);
        if let Err(e) = command.create_followup(&ctx.http, followup).await {
            tracing::error!("Cannot send failure reply: {e}");
        }
    }
}
