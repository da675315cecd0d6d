//! FAQ chat server and terminal client.

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use faq_chat::config::{AppConfig, Cli, Command};
use faq_chat::{server, terminal};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before clap reads env-backed flags
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED); stderr keeps stdout free for the terminal chat
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Arc::new(AppConfig::from_cli(&cli)?);
            server::start_server(config).await
        }
        Command::Chat { url } => terminal::run(&url).await,
    }
}
