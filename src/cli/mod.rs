use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::AppConfig;

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat with the oracle (default)
    Chat {},
    /// Run the chat API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Read once at startup and passed down explicitly
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) | None => {
            chat::run(config).await?;
        }
    }

    Ok(())
}
