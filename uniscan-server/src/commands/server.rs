use crate::{cli::ServerConfig, server};

pub async fn server(config: ServerConfig) -> anyhow::Result<()> {
    let client = super::build_client(&config.client)?;

    server::serve(&config, client).await?;

    Ok(())
}
