//! Devauth CLI binary entry point.

use devauth::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let result = match cli.command {
        Commands::Login(args) => devauth::cli::auth::handle_login(args).await,
        Commands::Status => devauth::cli::auth::handle_status().await,
        Commands::Logout => devauth::cli::auth::handle_logout().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
