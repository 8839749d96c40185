//! Command definitions and the dispatch registry.
//!
//! Commands are values implementing [`BotCommand`]: a label, optional
//! aliases, a context restriction, a slash-command schema, and handlers for
//! the slash and legacy text paths. The [`Registry`] is built once at
//! startup from an explicit command list and is immutable afterwards;
//! duplicate labels or aliases are a typed startup failure.

pub mod verify;

#[cfg(test)]
mod test;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{CommandInteraction, Context, CreateCommand, Message};

use crate::bot::BotState;
use crate::error::registry::RegistryError;
use crate::error::AppError;

/// Reply sent when a command handler fails unexpectedly.
pub const GENERIC_FAILURE_REPLY: &str =
    "Something went wrong while running that command. Please try again later.";

/// Where a command may be used, and how an incoming message is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandContext {
    /// Direct messages only.
    PrivateMessage,
    /// Guild text channels only.
    GuildMessage,
    /// Anywhere. Only meaningful as a command restriction; incoming messages
    /// are always classified as one of the other two.
    Both,
}

impl CommandContext {
    /// Whether a command restricted to `self` accepts a message classified
    /// as `incoming`.
    pub fn accepts(self, incoming: CommandContext) -> bool {
        self == incoming || self == CommandContext::Both
    }
}

/// A dispatchable bot command.
#[async_trait]
pub trait BotCommand: Send + Sync {
    /// Primary name, unique across the registry.
    fn label(&self) -> &'static str;

    /// Alternative names, sharing the label namespace.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Where this command may be used.
    fn context(&self) -> CommandContext;

    /// Declarative slash-command schema registered with Discord.
    fn schema(&self) -> CreateCommand;

    /// Slash execution. The interaction has already been deferred; replies
    /// go through the deferred-response hook.
    async fn run_slash(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &BotState,
    ) -> Result<(), AppError>;

    /// Legacy text execution with positional arguments.
    async fn run_text(
        &self,
        ctx: &Context,
        message: &Message,
        args: &[&str],
        state: &BotState,
    ) -> Result<(), AppError>;
}

/// Immutable label/alias lookup table over the registered commands.
pub struct Registry {
    commands: Vec<Arc<dyn BotCommand>>,
}

impl Registry {
    /// Builds the registry, rejecting any label or alias that collides with
    /// a previously seen one (case-sensitive, one namespace for both).
    pub fn build(commands: Vec<Arc<dyn BotCommand>>) -> Result<Self, RegistryError> {
        let mut seen: HashSet<&'static str> = HashSet::new();

        for command in &commands {
            for name in std::iter::once(command.label()).chain(command.aliases().iter().copied()) {
                if !seen.insert(name) {
                    return Err(RegistryError::Duplicate(name.to_string()));
                }
            }
        }

        Ok(Self { commands })
    }

    /// Looks up a command by label or alias, honoring its context
    /// restriction. Labels and aliases are unique, so at most one command
    /// can match a name.
    pub fn find(&self, name: &str, context: CommandContext) -> Option<&dyn BotCommand> {
        self.commands
            .iter()
            .find(|command| command.label() == name || command.aliases().contains(&name))
            .filter(|command| command.context().accepts(context))
            .map(|command| command.as_ref())
    }

    /// Labels of all registered commands, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|command| command.label())
    }

    /// Slash schemas for the Discord command-registration API.
    pub fn schemas(&self) -> Vec<CreateCommand> {
        self.commands.iter().map(|command| command.schema()).collect()
    }

    /// Help reply listing every registered command with the active prefix.
    pub fn help_listing(&self, prefix: &str) -> String {
        let commands = self
            .labels()
            .map(|label| format!("`{prefix}{label}`"))
            .collect::<Vec<_>>()
            .join(", ");

        format!("Unknown command. Available commands: {commands}")
    }
}

/// Splits a raw message into a command name and positional arguments.
///
/// `None` when the content is not prefixed. The remainder is split on
/// whitespace with no quoting or escaping; a bare prefix yields an empty
/// name, which no command can match.
pub fn parse_invocation<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next().unwrap_or("");

    Some((name, tokens.collect()))
}
