//! CLI entry point for devauth.

pub mod auth;

use clap::{Parser, Subcommand};

/// Devauth CLI
#[derive(Parser, Debug)]
#[command(
    name = "devauth",
    version,
    about = "OAuth 2.0 device authorization grant client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the device flow and store the resulting token
    Login(LoginArgs),
    /// Show the stored token status
    Status,
    /// Remove the stored token
    Logout,
}

/// Arguments for `devauth login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// OAuth client id (falls back to DEVAUTH_CLIENT_ID)
    #[arg(long)]
    pub client_id: Option<String>,

    /// OAuth client secret (falls back to DEVAUTH_CLIENT_SECRET)
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Requested scope; repeat for multiple (falls back to DEVAUTH_SCOPES)
    #[arg(long = "scope")]
    pub scopes: Vec<String>,

    /// Token file path (falls back to DEVAUTH_TOKEN_FILE, then
    /// ~/.devauth/tokens.json)
    #[arg(long)]
    pub token_file: Option<std::path::PathBuf>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
