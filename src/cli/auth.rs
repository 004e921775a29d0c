//! CLI command handlers for login, status, and logout.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::cli::LoginArgs;
use crate::config::{default_token_path, ClientConfig};
use crate::error::AuthError;
use crate::service::{AuthService, UserPrompt};
use crate::store::{FileTokenStore, TokenStore};

struct ConsolePrompt;

impl UserPrompt for ConsolePrompt {
    fn display(&self, verification_url: &str, user_code: &str) {
        println!("🔗 Visit: {verification_url}");
        println!("📋 Enter code: {user_code}");
        println!("⏳ Waiting for authorization...");
    }
}

/// Handle `devauth login`.
pub async fn handle_login(args: LoginArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    let token_path = args.token_file.unwrap_or_else(default_token_path);
    let store = Arc::new(FileTokenStore::new(token_path));
    let service = AuthService::new(config, store);

    // Ctrl-C cancels the in-flight wait.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    match service.login(&ConsolePrompt, cancel).await {
        Ok(_token) => {
            println!("✅ Authorization successful, token saved.");
            Ok(())
        }
        Err(AuthError::AccessDenied) => {
            eprintln!("❌ Authorization denied");
            std::process::exit(1);
        }
        Err(AuthError::Expired) => {
            eprintln!("❌ Device code expired, please try again");
            std::process::exit(1);
        }
        Err(AuthError::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle `devauth status`.
pub async fn handle_status() -> Result<(), Box<dyn std::error::Error>> {
    let store = FileTokenStore::new(default_token_path());
    match store.load()? {
        Some(token) => {
            println!("✅ Logged in (client {})", token.client_id);
            if token.refresh_token.is_some() {
                println!("   Refresh token present");
            }
        }
        None => println!("❌ Not logged in"),
    }
    Ok(())
}

/// Handle `devauth logout`.
pub async fn handle_logout() -> Result<(), Box<dyn std::error::Error>> {
    let store = FileTokenStore::new(default_token_path());
    store.clear()?;
    println!("✅ Logged out");
    Ok(())
}

fn resolve_config(args: &LoginArgs) -> Result<ClientConfig, AuthError> {
    let mut config = match (&args.client_id, &args.client_secret) {
        (Some(id), Some(secret)) => {
            let _ = dotenvy::dotenv();
            ClientConfig::new(id.clone(), secret.clone())
        }
        _ => {
            // Flags are all-or-nothing for the credential pair; otherwise
            // resolve both from the environment.
            ClientConfig::from_env()?
        }
    };
    if !args.scopes.is_empty() {
        config.scopes = args.scopes.clone();
    }
    Ok(config)
}
