use std::io;

use clap::Parser;
use uniscan_server::{Cli, cli::Commands, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup(config) => commands::lookup(config).await?,
        Commands::Server(config) => commands::server(config).await?,
    }

    Ok(())
}
