use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::DeviceAuthClient;
use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::store::TokenStore;
use crate::token::Token;

/// User-facing display collaborator.
///
/// Receives the verification URL and user code once the device code is
/// issued. How they reach the user (console, UI, API response) is the
/// implementer's business; the device code itself is never passed here.
pub trait UserPrompt: Send + Sync {
    fn display(&self, verification_url: &str, user_code: &str);
}

/// Service facade sequencing the whole device flow.
///
/// All I/O decisions (printing, prompting, exit codes) belong to the
/// caller. `AuthService` only returns typed results and errors, and only
/// touches the store after a successful outcome.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use devauth::{AuthService, ClientConfig, FileTokenStore};
///
/// let config = ClientConfig::new("client-id", "client-secret");
/// let store = Arc::new(FileTokenStore::new("/tmp/tokens.json"));
/// let svc = AuthService::new(config, store);
/// ```
pub struct AuthService {
    client: DeviceAuthClient,
    store: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            client: DeviceAuthClient::new(config),
            store,
        }
    }

    /// Run one complete device flow.
    ///
    /// Requests the codes (aborting on failure before any user
    /// interaction), hands the user-facing pair to `prompt`, then polls to
    /// a terminal outcome. The token record is persisted only on success;
    /// every failure leaves the store untouched.
    pub async fn login(
        &self,
        prompt: &dyn UserPrompt,
        cancel: CancellationToken,
    ) -> Result<Token, AuthError> {
        let session = self.client.request_codes().await?;
        prompt.display(&session.verification_url, &session.user_code);
        let token = self.client.poll_until_authorized(&session, cancel).await?;
        self.store.save(&token)?;
        Ok(token)
    }

    /// Check the stored token, if any.
    pub fn status(&self) -> Result<Option<Token>, AuthError> {
        self.store.load()
    }

    /// Remove the stored token.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear()
    }
}
