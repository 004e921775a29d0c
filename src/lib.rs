//! Devauth: OAuth 2.0 Device Authorization Grant client.
//!
//! Obtains a device code and user code for a limited-input device, hands
//! the user-facing pair to a display collaborator, and polls the token
//! endpoint at the server-dictated cadence until the user authorizes (or
//! the flow is denied, expires, or is cancelled). Successful tokens are
//! persisted to a file-backed store for later refresh use.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use devauth::{AuthService, ClientConfig, FileTokenStore, UserPrompt};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Console;
//! impl UserPrompt for Console {
//!     fn display(&self, verification_url: &str, user_code: &str) {
//!         println!("Visit {verification_url} and enter {user_code}");
//!     }
//! }
//!
//! # async fn example() -> Result<(), devauth::AuthError> {
//! let config = ClientConfig::new("client-id", "client-secret")
//!     .with_scopes(["https://www.googleapis.com/auth/drive.metadata.readonly"]);
//! let store = Arc::new(FileTokenStore::new("/tmp/tokens.json"));
//! let svc = AuthService::new(config, store);
//! let token = svc.login(&Console, CancellationToken::new()).await?;
//! println!("authorized, token type {}", token.token_type);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod device_code;
pub mod error;
pub mod service;
pub mod store;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::DeviceAuthClient;
pub use config::{default_token_path, ClientConfig};
pub use device_code::{DeviceCodePoll, DeviceCodeSession};
pub use error::AuthError;
pub use service::{AuthService, UserPrompt};
pub use store::{FileTokenStore, TokenStore};
pub use token::Token;
