use thiserror::Error;

/// Normalized errors for the device authorization flow.
///
/// Every variant is terminal for the current flow. The waiting states
/// (`authorization_pending`, `slow_down`) are not errors and never surface
/// here; they are carried by [`crate::device_code::DeviceCodePoll`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// The device-code request itself failed (transport, non-200 status,
    /// or malformed body). The flow aborts before any user interaction.
    #[error("Device code request failed: {0}")]
    RequestFailed(String),
    /// The user declined the authorization request.
    #[error("Access denied")]
    AccessDenied,
    /// The device code's lifetime elapsed before the user authorized.
    #[error("Device code expired")]
    Expired,
    /// The flow was cancelled from outside (signal or caller token).
    #[error("Authorization cancelled")]
    Cancelled,
    /// The token endpoint answered with something the flow does not
    /// recognize: an unknown error code or an unparseable body.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
