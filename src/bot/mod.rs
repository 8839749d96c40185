//! Discord bot integration.
//!
//! This module owns the serenity client and the event handlers that bridge
//! Discord to the command registry: slash interactions, the legacy prefixed
//! text path, and ready-time registration of the slash schemas.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - guild availability events
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - the legacy text-command path
//! - `MESSAGE_CONTENT` - reading prefixed commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;

use std::sync::Arc;

use crate::connections::ConnectionManager;

/// Shared state available to event and command handlers.
pub struct BotState {
    /// Guild → website connection routing.
    pub connections: Arc<dyn ConnectionManager>,
    /// Process-wide command prefix used when a guild has none configured.
    pub default_prefix: String,
}
