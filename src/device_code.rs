use chrono::{DateTime, Utc};

use crate::token::Token;

/// Live device-code session returned by the device-authorization endpoint.
///
/// Exactly one session is active per authentication attempt. The
/// `device_code` identifies the attempt to the server and must never be
/// logged or shown to the user; only `user_code` and `verification_url`
/// are user-facing.
///
/// # Example
/// ```no_run
/// use devauth::DeviceCodeSession;
/// use chrono::{DateTime, Utc};
///
/// let session = DeviceCodeSession {
///     verification_url: "https://example.com/device".to_string(),
///     user_code: "ABCD-EFGH".to_string(),
///     device_code: "device-auth-id".to_string(),
///     interval_secs: 5,
///     expires_at: DateTime::<Utc>::from(std::time::SystemTime::now()),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DeviceCodeSession {
    pub verification_url: String,
    pub user_code: String,
    pub device_code: String,
    /// Server-dictated minimum seconds between token-exchange attempts.
    /// Always at least 1.
    pub interval_secs: u64,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a single token-exchange attempt.
#[derive(Debug, Clone)]
pub enum DeviceCodePoll {
    Pending { interval_secs: u64 },
    SlowDown { interval_secs: u64 },
    Authorized { token: Token },
    AccessDenied,
    Expired,
}
