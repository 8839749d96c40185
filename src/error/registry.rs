use thiserror::Error;

/// Command registration failures.
///
/// Raised while the command registry is built at startup, before any command
/// becomes dispatchable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A label or alias collides with an already registered label or alias.
    ///
    /// Labels and aliases share one case-sensitive namespace across the
    /// whole registry.
    #[error("Command already registered: {0}")]
    Duplicate(String),
}
