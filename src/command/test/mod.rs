use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateCommand, Message};

use crate::bot::BotState;
use crate::command::{BotCommand, CommandContext, Registry};
use crate::error::registry::RegistryError;
use crate::error::AppError;


/// Minimal command used to exercise registry behavior.
///
/// Handlers are never invoked in these tests; a live serenity `Context`
/// cannot be constructed outside a gateway session.
struct Probe {
    label: &'static str,
    aliases: &'static [&'static str],
    context: CommandContext,
}

impl Probe {
    fn arc(
        label: &'static str,
        aliases: &'static [&'static str],
        context: CommandContext,
    ) -> Arc<dyn BotCommand> {
        Arc::new(Self {
            label,
            aliases,
            context,
        })
    }
}

#[async_trait]
impl BotCommand for Probe {
    fn label(&self) -> &'static str {
        self.label
    }

    fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    fn context(&self) -> CommandContext {
        self.context
    }

    fn schema(&self) -> CreateCommand {
        CreateCommand::new(self.label).description("probe command")
    }

    async fn run_slash(
        &self,
        _ctx: &Context,
        _interaction: &CommandInteraction,
        _state: &BotState,
    ) -> Result<(), AppError> {
        Ok(())
    }

    async fn run_text(
        &self,
        _ctx: &Context,
        _message: &Message,
        _args: &[&str],
        _state: &BotState,
    ) -> Result<(), AppError> {
        Ok(())
    }
}
