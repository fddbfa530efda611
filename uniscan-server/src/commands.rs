mod lookup;
mod server;

use std::time::Duration;

pub use self::{lookup::lookup, server::server};
use crate::{
    cli::ClientConfig,
    fetcher::{BuildError, Client},
};

fn build_client(config: &ClientConfig) -> Result<Client, BuildError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    Client::new(config.uniprot_base_url.clone(), timeout)
}
