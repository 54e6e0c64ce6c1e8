use anyhow::Result;
use clap::Parser;
use meetup_stream::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(command) => command.execute().await,
        None => Command::walkthrough().await,
    }
}
