use thiserror::Error;

/// Connection-manager storage failures.
///
/// "Not found" is not an error: optional lookups return `Ok(None)`. The
/// variants here are the genuine failure classes - the backing store being
/// unreachable, an operation the manager does not support, a conflicting
/// write, or a stored value that no longer parses.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store failed.
    #[error(transparent)]
    Unavailable(#[from] sea_orm::DbErr),

    /// The operation is not supported by this connection manager.
    ///
    /// Raised by every mutating and time-range operation of the stateless
    /// manager.
    #[error("Unsupported connection manager operation: {0}")]
    Unsupported(&'static str),

    /// A connection for this guild already exists.
    #[error("A connection already exists for guild {0}")]
    AlreadyExists(u64),

    /// A stored API URL failed to parse.
    #[error("Stored API URL '{value}' is not a valid URL: {source}")]
    InvalidUrl {
        /// The stored string that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
