pub mod cli;
pub mod commands;
pub mod fetcher;
#[cfg(test)]
mod fixtures;
pub mod lookup;
pub mod server;

pub use self::{cli::Cli, fetcher::Client};
