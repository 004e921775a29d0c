//! Device-authorization client: code request and token polling.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::device_code::{DeviceCodePoll, DeviceCodeSession};
use crate::error::AuthError;
use crate::token::Token;

const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// Seconds added to the polling interval for each `slow_down` response.
const SLOW_DOWN_STEP_SECS: u64 = 5;

/// HTTP client for one device-authorization flow.
///
/// [`request_codes`](Self::request_codes) performs the single code request;
/// [`poll_once`](Self::poll_once) classifies one token exchange; and
/// [`poll_until_authorized`](Self::poll_until_authorized) runs the full
/// wait-then-request loop to a terminal outcome.
///
/// # Example
/// ```no_run
/// use devauth::{ClientConfig, DeviceAuthClient};
///
/// let config = ClientConfig::new("client-id", "client-secret")
///     .with_scopes(["email"]);
/// let client = DeviceAuthClient::new(config);
/// ```
pub struct DeviceAuthClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl DeviceAuthClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a device code and user code for the configured client.
    ///
    /// A single attempt: any transport failure, non-success status, or
    /// malformed body is [`AuthError::RequestFailed`]. Retrying is the
    /// caller's decision.
    pub async fn request_codes(&self) -> Result<DeviceCodeSession, AuthError> {
        let scope = self.config.scope_string();
        let resp = self
            .http
            .post(&self.config.device_endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("scope", scope.as_str()),
            ])
            .send()
            .await
            .map_err(|err| AuthError::RequestFailed(err.to_string()))?;
        if !resp.status().is_success() {
            return Err(AuthError::RequestFailed(format!(
                "device code request failed with status {}",
                resp.status()
            )));
        }
        let payload: DeviceCodeResponse = resp
            .json()
            .await
            .map_err(|err| AuthError::RequestFailed(err.to_string()))?;

        let expires_at = Utc::now() + ChronoDuration::seconds(payload.expires_in as i64);
        tracing::debug!(
            interval_secs = payload.interval,
            expires_in = payload.expires_in,
            "device code issued"
        );
        Ok(DeviceCodeSession {
            verification_url: payload.verification_url,
            user_code: payload.user_code,
            device_code: payload.device_code,
            interval_secs: payload.interval.max(1),
            expires_at,
        })
    }

    /// Perform one token-exchange attempt and classify the response.
    ///
    /// `interval_secs` is the loop's current interval; it is echoed back on
    /// `Pending` and increased by the fixed slow-down step on `SlowDown`.
    /// Returns [`DeviceCodePoll::Expired`] without contacting the server
    /// once the session deadline has passed.
    pub async fn poll_once(
        &self,
        session: &DeviceCodeSession,
        interval_secs: u64,
    ) -> Result<DeviceCodePoll, AuthError> {
        if Utc::now() >= session.expires_at {
            return Ok(DeviceCodePoll::Expired);
        }
        let resp = self
            .http
            .post(&self.config.token_endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("device_code", session.device_code.as_str()),
                ("grant_type", DEVICE_CODE_GRANT),
            ])
            .send()
            .await?;

        if resp.status().is_success() {
            let payload: TokenResponse = resp.json().await.map_err(|err| {
                AuthError::InvalidResponse(format!("token response did not parse: {err}"))
            })?;
            return Ok(DeviceCodePoll::Authorized {
                token: Token {
                    access_token: payload.access_token,
                    refresh_token: payload.refresh_token,
                    token_type: payload.token_type,
                    expires_in: payload.expires_in,
                    client_id: self.config.client_id.clone(),
                    client_secret: self.config.client_secret.clone(),
                },
            });
        }

        let status = resp.status();
        let payload: TokenErrorResponse = resp.json().await.map_err(|err| {
            AuthError::InvalidResponse(format!(
                "error response (status {status}) did not parse: {err}"
            ))
        })?;
        match payload.error.as_str() {
            "authorization_pending" => Ok(DeviceCodePoll::Pending { interval_secs }),
            "slow_down" => Ok(DeviceCodePoll::SlowDown {
                interval_secs: interval_secs + SLOW_DOWN_STEP_SECS,
            }),
            "access_denied" => Ok(DeviceCodePoll::AccessDenied),
            "expired_token" => Ok(DeviceCodePoll::Expired),
            other => Err(AuthError::InvalidResponse(format!(
                "unexpected token endpoint error: {other}"
            ))),
        }
    }

    /// Poll the token endpoint until the flow reaches a terminal outcome.
    ///
    /// Each cycle waits the current interval first (the initial request is
    /// never sent immediately), then exchanges the device code. `Pending`
    /// keeps the interval; `slow_down` adds five seconds each time it is
    /// received. Denial, expiry, unknown error codes, unparseable bodies,
    /// and transport failures all terminate the loop; so does `cancel`,
    /// which interrupts an in-progress wait and returns
    /// [`AuthError::Cancelled`] promptly.
    pub async fn poll_until_authorized(
        &self,
        session: &DeviceCodeSession,
        cancel: CancellationToken,
    ) -> Result<Token, AuthError> {
        let mut interval_secs = session.interval_secs.max(1);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("authorization wait cancelled");
                    return Err(AuthError::Cancelled);
                }
                _ = tokio::time::sleep(Duration::from_secs(interval_secs)) => {}
            }
            match self.poll_once(session, interval_secs).await? {
                DeviceCodePoll::Authorized { token } => {
                    tracing::info!("device flow authorized");
                    return Ok(token);
                }
                DeviceCodePoll::Pending { .. } => {
                    tracing::debug!(interval_secs, "authorization pending");
                }
                DeviceCodePoll::SlowDown {
                    interval_secs: next,
                } => {
                    tracing::debug!(interval_secs = next, "server requested slow down");
                    interval_secs = next;
                }
                DeviceCodePoll::AccessDenied => return Err(AuthError::AccessDenied),
                DeviceCodePoll::Expired => return Err(AuthError::Expired),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    #[serde(alias = "verification_uri")]
    verification_url: String,
    expires_in: u64,
    interval: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
}
