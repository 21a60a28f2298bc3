//! Create-user HTTP client.
//!
//! The client owns the endpoint resolution and the HTTP-status-to-outcome
//! mapping. Transport errors and unreadable bodies never escape as `Err`;
//! they collapse into [`SubmissionOutcome::UnknownFailure`] so the caller
//! always gets exactly one outcome per invocation.

use crate::signup::outcome::SubmissionOutcome;
use anyhow::{anyhow, Result};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Fixed create-user path under the configured base URL.
pub const CREATE_USER_PATH: &str = "/v1/users";

/// The only 422 error code with a dedicated outcome.
const NOT_ALLOWED: &str = "not_allowed";

/// Error body returned with a 422, a list of string error codes.
#[derive(Deserialize, Debug)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SignupClient {
    client: Client,
    endpoint: String,
}

impl SignupClient {
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed, has no host, uses an
    /// unsupported scheme, or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        let endpoint = endpoint_url(base_url, CREATE_USER_PATH)?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a create-user request authenticated with the bearer token.
    pub async fn create_user(
        &self,
        username: &str,
        password: &SecretString,
        token: &str,
    ) -> SubmissionOutcome {
        let payload = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(response) => outcome_for(response).await,
            Err(err) => {
                debug!("create-user request failed: {err}");

                SubmissionOutcome::UnknownFailure
            }
        }
    }
}

async fn outcome_for(response: Response) -> SubmissionOutcome {
    match response.status() {
        StatusCode::OK => SubmissionOutcome::Success,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SubmissionOutcome::AuthFailure,
        StatusCode::INTERNAL_SERVER_ERROR => SubmissionOutcome::ServerError,
        StatusCode::UNPROCESSABLE_ENTITY => rejection_outcome(response).await,
        status => {
            debug!("unexpected create-user status: {}", status);

            SubmissionOutcome::UnknownFailure
        }
    }
}

/// Map a 422 body to an outcome; only `not_allowed` is special-cased, every
/// other code (and an unreadable body) stays generic.
async fn rejection_outcome(response: Response) -> SubmissionOutcome {
    match response.json::<RejectionBody>().await {
        Ok(body) if body.errors.iter().any(|code| code == NOT_ALLOWED) => {
            SubmissionOutcome::PolicyRejected
        }
        Ok(_) => SubmissionOutcome::UnknownFailure,
        Err(err) => {
            debug!("unreadable rejection body: {err}");

            SubmissionOutcome::UnknownFailure
        }
    }
}

/// Normalize a base URL into `scheme://host:port` and append the path.
/// # Errors
/// Returns an error if `base_url` cannot be parsed, has no host, or uses an
/// unsupported scheme.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}")),
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}{path}");

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}
