//! PlaceScout CLI - Command-line interface
//!
//! Provides command-line access to the PlaceScout search pipeline.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "placescout")]
#[command(about = "Business search and enrichment over an upstream places provider")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
