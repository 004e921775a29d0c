//! Caller-supplied client configuration.

use std::path::PathBuf;

use crate::error::AuthError;

/// Google's device-authorization endpoints, the defaults when no override
/// is supplied.
pub const DEFAULT_DEVICE_ENDPOINT: &str = "https://oauth2.googleapis.com/device/code";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Client identity and endpoints for one device flow.
///
/// Immutable once handed to the flow. There are no built-in credentials:
/// `client_id` and `client_secret` always come from the caller (or, for the
/// CLI, from the environment).
///
/// # Example
/// ```
/// use devauth::ClientConfig;
///
/// let config = ClientConfig::new("client-id", "client-secret")
///     .with_scopes(["https://www.googleapis.com/auth/drive.metadata.readonly"]);
/// assert_eq!(
///     config.scope_string(),
///     "https://www.googleapis.com/auth/drive.metadata.readonly"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Requested scopes, joined by single spaces for transmission in the
    /// order given.
    pub scopes: Vec<String>,
    pub device_endpoint: String,
    pub token_endpoint: String,
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scopes: Vec::new(),
            device_endpoint: DEFAULT_DEVICE_ENDPOINT.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_device_endpoint(mut self, url: impl Into<String>) -> Self {
        self.device_endpoint = url.into();
        self
    }

    pub fn with_token_endpoint(mut self, url: impl Into<String>) -> Self {
        self.token_endpoint = url.into();
        self
    }

    /// Space-joined scope list, preserving order.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Resolve configuration from the environment (CLI entry path).
    ///
    /// Loads `.env` if present, then reads `DEVAUTH_CLIENT_ID`,
    /// `DEVAUTH_CLIENT_SECRET`, and optionally `DEVAUTH_SCOPES`
    /// (space-separated), `DEVAUTH_DEVICE_ENDPOINT`, and
    /// `DEVAUTH_TOKEN_ENDPOINT`.
    pub fn from_env() -> Result<Self, AuthError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let client_id = require_env("DEVAUTH_CLIENT_ID")?;
        let client_secret = require_env("DEVAUTH_CLIENT_SECRET")?;
        let mut config = Self::new(client_id, client_secret);

        if let Ok(scopes) = std::env::var("DEVAUTH_SCOPES") {
            config.scopes = scopes.split_whitespace().map(str::to_string).collect();
        }
        if let Ok(url) = std::env::var("DEVAUTH_DEVICE_ENDPOINT") {
            config.device_endpoint = url;
        }
        if let Ok(url) = std::env::var("DEVAUTH_TOKEN_ENDPOINT") {
            config.token_endpoint = url;
        }

        Ok(config)
    }
}

/// Default token file path (`~/.devauth/tokens.json`), used by the CLI when
/// `DEVAUTH_TOKEN_FILE` is not set.
pub fn default_token_path() -> PathBuf {
    if let Ok(path) = std::env::var("DEVAUTH_TOKEN_FILE") {
        return PathBuf::from(path);
    }
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".devauth").join("tokens.json"))
        .unwrap_or_else(|| PathBuf::from(".devauth/tokens.json"))
}

fn require_env(var: &str) -> Result<String, AuthError> {
    std::env::var(var)
        .map_err(|_| AuthError::Configuration(format!("Environment variable {var} not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_string_joins_with_single_spaces_in_order() {
        let config = ClientConfig::new("id", "secret").with_scopes(["email", "profile", "drive"]);
        assert_eq!(config.scope_string(), "email profile drive");
    }

    #[test]
    fn scope_string_is_empty_without_scopes() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.scope_string(), "");
    }

    #[test]
    fn defaults_point_at_google_endpoints() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.device_endpoint, DEFAULT_DEVICE_ENDPOINT);
        assert_eq!(config.token_endpoint, DEFAULT_TOKEN_ENDPOINT);
    }

    #[test]
    fn endpoint_overrides_replace_defaults() {
        let config = ClientConfig::new("id", "secret")
            .with_device_endpoint("http://localhost:1/device")
            .with_token_endpoint("http://localhost:1/token");
        assert_eq!(config.device_endpoint, "http://localhost:1/device");
        assert_eq!(config.token_endpoint, "http://localhost:1/token");
    }
}
