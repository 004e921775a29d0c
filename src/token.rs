use serde::{Deserialize, Serialize};

/// Token payload produced by a successful device flow and persisted by a
/// [`TokenStore`](crate::store::TokenStore).
///
/// The client id and secret are echoed into the record so a later
/// refresh-token exchange has everything it needs in one place. The whole
/// struct is sensitive; stores must treat it like a credential file.
///
/// # Example
/// ```no_run
/// use devauth::Token;
///
/// let token = Token {
///     access_token: "access".to_string(),
///     refresh_token: Some("refresh".to_string()),
///     token_type: "Bearer".to_string(),
///     expires_in: 3600,
///     client_id: "client".to_string(),
///     client_secret: "secret".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Lifetime of the access token in seconds, as reported by the server.
    pub expires_in: u64,
    pub client_id: String,
    pub client_secret: String,
}
