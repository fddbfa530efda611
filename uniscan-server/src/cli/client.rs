use clap::Args;
use reqwest::Url;

#[derive(Debug, Args)]
pub struct ClientConfig {
    /// The base URL of the UniProt REST API.
    #[clap(long, env, default_value = "https://rest.uniprot.org")]
    pub uniprot_base_url: Url,

    /// The number of seconds to wait for UniProt to respond. Must be at least 1.
    #[clap(
        long = "timeout",
        env = "UNIPROT_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub timeout_secs: u64,
}
