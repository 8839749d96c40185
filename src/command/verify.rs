//! The `/verify` command: links a Discord identity to a website account.

use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup, GuildId, Message, ResolvedOption, ResolvedValue, UserId,
};

use crate::api::{VerifyApi, CORE_INTEGRATION_USERNAME_ERROR, CORE_INVALID_CODE};
use crate::bot::BotState;
use crate::command::{BotCommand, CommandContext};
use crate::error::AppError;
use crate::model::IntegrationData;
use crate::service::role_sync;

const TOKEN_OPTION: &str = "token";

pub(crate) const SUCCESS_REPLY: &str =
    "Your Discord account has been linked to your website account.";
pub(crate) const TOKEN_INVALID_REPLY: &str =
    "That token is not valid. Request a new one from your website account settings and try again.";
pub(crate) const ALREADY_LINKED_REPLY: &str =
    "That username is already linked to a website account.";
pub(crate) const WEBSITE_ERROR_REPLY: &str =
    "Could not reach the website right now. Please try again later.";
pub(crate) const NOT_CONFIGURED_REPLY: &str =
    "This guild is not linked to a website yet. Ask an administrator to set up the connection first.";
const GUILD_ONLY_REPLY: &str = "This command can only be used in a guild.";
const USAGE_REPLY: &str = "Usage: verify <token>";

/// Result of a token exchange, classified for the user-facing reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerifyOutcome {
    /// The account was linked.
    Linked,
    /// The website rejected the token.
    TokenInvalid,
    /// The username is already linked to an account.
    AlreadyLinked,
    /// Transport failure or an unclassified website error.
    WebsiteUnreachable,
}

impl VerifyOutcome {
    pub(crate) fn reply(self) -> &'static str {
        match self {
            VerifyOutcome::Linked => SUCCESS_REPLY,
            VerifyOutcome::TokenInvalid => TOKEN_INVALID_REPLY,
            VerifyOutcome::AlreadyLinked => ALREADY_LINKED_REPLY,
            VerifyOutcome::WebsiteUnreachable => WEBSITE_ERROR_REPLY,
        }
    }

    /// Only a fresh link kicks off role synchronization.
    pub(crate) fn triggers_role_sync(self) -> bool {
        matches!(self, VerifyOutcome::Linked)
    }
}

/// Exchanges the token and classifies the result.
pub(crate) async fn run_verify(
    api: &dyn VerifyApi,
    data: &IntegrationData,
    token: &str,
) -> VerifyOutcome {
    match api.verify_integration(data, token).await {
        Ok(()) => VerifyOutcome::Linked,
        Err(error) => match error.website_code() {
            Some(CORE_INVALID_CODE) => VerifyOutcome::TokenInvalid,
            Some(CORE_INTEGRATION_USERNAME_ERROR) => VerifyOutcome::AlreadyLinked,
            _ => {
                tracing::error!("Website connection error during verification: {error}");
                VerifyOutcome::WebsiteUnreachable
            }
        },
    }
}

pub struct VerifyCommand;

impl VerifyCommand {
    /// Shared by the slash and text paths: resolves the guild's API handle,
    /// runs the exchange, and spawns role sync on a fresh link.
    async fn link_account(
        &self,
        ctx: &Context,
        state: &BotState,
        guild_id: GuildId,
        data: &IntegrationData,
        token: &str,
    ) -> Result<&'static str, AppError> {
        let Some(api) = state.connections.api(guild_id.get()).await? else {
            return Ok(NOT_CONFIGURED_REPLY);
        };

        let outcome = run_verify(api.as_ref(), data, token).await;

        if outcome.triggers_role_sync() {
            tracing::info!(
                "Verified user {} ({}) in guild {}",
                data.username,
                data.id,
                guild_id
            );
            role_sync::spawn(ctx.http.clone(), api, guild_id, UserId::new(data.id));
        }

        Ok(outcome.reply())
    }
}

fn token_option<'a>(interaction: &'a CommandInteraction) -> Option<&'a str> {
    interaction
        .data
        .options()
        .into_iter()
        .find_map(|option| match option {
            ResolvedOption {
                name: TOKEN_OPTION,
                value: ResolvedValue::String(token),
                ..
            } => Some(token),
            _ => None,
        })
}

#[async_trait]
impl BotCommand for VerifyCommand {
    fn label(&self) -> &'static str {
        "verify"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["link"]
    }

    fn context(&self) -> CommandContext {
        CommandContext::GuildMessage
    }

    fn schema(&self) -> CreateCommand {
        CreateCommand::new(self.label())
            .description("Link your Discord account to your website account")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    TOKEN_OPTION,
                    "One-time token from your website account settings",
                )
                .required(true),
            )
            .dm_permission(false)
    }

    async fn run_slash(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &BotState,
    ) -> Result<(), AppError> {
        let reply = match (interaction.guild_id, token_option(interaction)) {
            (None, _) => GUILD_ONLY_REPLY,
            (_, None) => USAGE_REPLY,
            (Some(guild_id), Some(token)) => {
                let data = IntegrationData::from(&interaction.user);
                self.link_account(ctx, state, guild_id, &data, token).await?
            }
        };

        interaction
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new().content(reply),
            )
            .await?;

        Ok(())
    }

    async fn run_text(
        &self,
        ctx: &Context,
        message: &Message,
        args: &[&str],
        state: &BotState,
    ) -> Result<(), AppError> {
        let reply = match (message.guild_id, args.first().copied()) {
            (None, _) => GUILD_ONLY_REPLY,
            (_, None) => USAGE_REPLY,
            (Some(guild_id), Some(token)) => {
                let data = IntegrationData::from(&message.author);
                self.link_account(ctx, state, guild_id, &data, token).await?
            }
        };

        message.reply(&ctx.http, reply).await?;

        Ok(())
    }
}
