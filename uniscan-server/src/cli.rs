pub mod client;
pub mod lookup;
pub mod server;

use clap::{Parser, Subcommand};

pub use self::{
    client::ClientConfig,
    lookup::{Format, LookupConfig},
    server::ServerConfig,
};

#[derive(Debug, Parser)]
#[clap(version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prints the features of an entry that overlap a region
    Lookup(LookupConfig),
    /// Starts the web server and blocks indefinitely
    Server(ServerConfig),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse_lookup(timeout: &str) -> Result<LookupConfig, clap::Error> {
        let cli = Cli::try_parse_from([
            "uniscan",
            "lookup",
            "Q7Z4F1",
            "--start",
            "494",
            "--end",
            "500",
            "--timeout",
            timeout,
        ])?;

        match cli.command {
            Commands::Lookup(config) => Ok(config),
            Commands::Server(_) => panic!("expected a lookup command"),
        }
    }

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_timeout() -> Result<(), clap::Error> {
        assert_eq!(parse_lookup("1")?.client.timeout_secs, 1);
        assert_eq!(parse_lookup("30")?.client.timeout_secs, 30);

        assert!(matches!(
            parse_lookup("0"),
            Err(e) if e.kind() == clap::error::ErrorKind::ValueValidation
        ));

        assert!(parse_lookup("-1").is_err());

        Ok(())
    }
}
