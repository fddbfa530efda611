use std::net::SocketAddr;

use clap::Parser;

use super::ClientConfig;

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// The socket address the server binds to.
    #[clap(long, env = "BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[clap(flatten)]
    pub client: ClientConfig,
}
