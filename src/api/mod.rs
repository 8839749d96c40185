//! Website API adapter.
//!
//! A thin, typed client for the two NamelessMC endpoints the bot consumes:
//! verifying an account-link token and reading the Discord role ids a linked
//! account should hold. Everything else about the website API is out of
//! scope; transport is delegated to a shared `reqwest::Client`.

pub mod error;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::model::IntegrationData;

pub use error::{ApiError, CORE_INTEGRATION_USERNAME_ERROR, CORE_INVALID_CODE};

/// The slice of the website API used by the verify command.
///
/// Split out as a trait so command tests can substitute a stub client.
#[async_trait]
pub trait VerifyApi: Send + Sync {
    /// Exchanges a one-time token for linking the given Discord identity to
    /// a website account.
    async fn verify_integration(&self, data: &IntegrationData, token: &str)
        -> Result<(), ApiError>;
}

/// Handle to one guild's website API.
#[derive(Debug, Clone)]
pub struct NamelessApi {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    integration: &'a str,
    identifier: String,
    username: &'a str,
    code: &'a str,
}

impl NamelessApi {
    /// Creates an API handle for the given base URL.
    ///
    /// The base URL path is normalized to end with a slash so relative
    /// endpoint paths append instead of replacing the last segment.
    pub fn new(mut base_url: Url, client: reqwest::Client) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { base_url, client }
    }

    /// The base URL this handle talks to.
    pub fn api_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidEndpoint {
                path: path.to_string(),
                source,
            })
    }

    /// Sends a request and decodes the website's JSON envelope.
    ///
    /// The website reports typed failures as an `error` code in the body,
    /// independent of the HTTP status.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ApiError::UnexpectedResponse { status })?;

        if let Some(code) = body.get("error").and_then(|v| v.as_str()) {
            return Err(ApiError::Website {
                code: code.to_string(),
                message: body
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        if !status.is_success() {
            return Err(ApiError::UnexpectedResponse { status });
        }

        Ok(body)
    }

    /// Asks the website which Discord role ids the linked account should
    /// hold, based on its website group memberships.
    pub async fn user_role_ids(&self, discord_id: u64) -> Result<Vec<u64>, ApiError> {
        let endpoint = self.endpoint(&format!("users/integration_id:discord:{discord_id}"))?;
        let body = self.execute(self.client.get(endpoint)).await?;

        Ok(role_ids_from_groups(&body))
    }
}

#[async_trait]
impl VerifyApi for NamelessApi {
    async fn verify_integration(
        &self,
        data: &IntegrationData,
        token: &str,
    ) -> Result<(), ApiError> {
        let endpoint = self.endpoint("integration/verify")?;
        let request = VerifyRequest {
            integration: "discord",
            identifier: data.id.to_string(),
            username: &data.username,
            code: token,
        };

        self.execute(self.client.post(endpoint).json(&request))
            .await?;

        Ok(())
    }
}

/// Extracts Discord role ids from a website user payload.
///
/// Groups without a `discord_role_id` mapping are skipped, as are role ids
/// that do not parse as snowflakes.
fn role_ids_from_groups(body: &serde_json::Value) -> Vec<u64> {
    let Some(groups) = body.get("groups").and_then(|v| v.as_array()) else {
        return Vec::new();
    };

    groups
        .iter()
        .filter_map(|group| group.get("discord_role_id").and_then(|v| v.as_str()))
        .filter_map(|role_id| role_id.parse::<u64>().ok())
        .collect()
}
