use anyhow::Result;
use cosmic_oracle::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
