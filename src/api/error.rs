use thiserror::Error;

/// Website error code for an invalid or expired verification token.
pub const CORE_INVALID_CODE: &str = "core:invalid_code";

/// Website error code for a username that is already linked to another
/// integration.
pub const CORE_INTEGRATION_USERNAME_ERROR: &str = "core:integration_username_error";

/// Errors from the website API adapter.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure from reqwest (connect, timeout, TLS, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The website answered with a typed error code.
    #[error("Website error {code}: {message}")]
    Website {
        /// Namespaced website error code, e.g. `core:invalid_code`
        code: String,
        /// Human-readable message from the website, possibly empty
        message: String,
    },

    /// The website answered with something that is not a JSON API response.
    #[error("Unexpected response from website (HTTP {status})")]
    UnexpectedResponse {
        /// HTTP status of the unparseable response
        status: reqwest::StatusCode,
    },

    /// A relative endpoint path could not be joined onto the base URL.
    #[error("Failed to build endpoint URL for '{path}': {source}")]
    InvalidEndpoint {
        /// The relative path that failed to join
        path: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// The website error code, when this is a typed website error.
    pub fn website_code(&self) -> Option<&str> {
        match self {
            ApiError::Website { code, .. } => Some(code),
            _ => None,
        }
    }
}
