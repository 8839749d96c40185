//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum is the top-level type used by startup and the command dispatch
//! boundary; domain-specific enums (`ConfigError`, `RegistryError`,
//! `StorageError`) live in their own submodules and convert into `AppError`
//! via `#[from]`.

pub mod config;
pub mod registry;
pub mod storage;

use thiserror::Error;

use crate::api::ApiError;
use crate::error::{config::ConfigError, registry::RegistryError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the bot. Startup errors
/// (config, registry, database, Discord client construction) are fatal;
/// errors reaching the dispatch boundary are logged and turned into a
/// generic user-facing reply instead of propagating.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Duplicate command label or alias detected while building the command
    /// registry. Always fatal: no command becomes dispatchable.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Connection-manager storage error.
    ///
    /// Call sites recover where a default exists (e.g. prefix lookup falls
    /// back to the process-wide prefix); otherwise the user gets a generic
    /// reply and the error is logged.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Database operation error from SeaORM outside the connection-manager
    /// surface (connecting, running migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Website API error from the NamelessMC adapter.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as
/// serenity::Error is very large and would make all AppError variants larger
/// if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
