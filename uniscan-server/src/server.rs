mod error;
mod features;
mod pages;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use minijinja::Environment;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::ServiceBuilderExt;
use tracing::{error, info};
use utoipa::OpenApi;

pub use self::error::Error;
use crate::{Client, cli::ServerConfig};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(OpenApi)]
#[openapi(paths(features::index))]
struct ApiDoc;

#[derive(Clone)]
pub struct Context {
    client: Client,
    templates: Arc<Environment<'static>>,
}

impl Context {
    pub fn new(client: Client) -> std::result::Result<Self, minijinja::Error> {
        let templates = pages::templates()?;

        Ok(Self {
            client,
            templates: Arc::new(templates),
        })
    }
}

pub async fn serve(config: &ServerConfig, client: Client) -> anyhow::Result<()> {
    let service = ServiceBuilder::new().trace_for_http();

    let ctx = Context::new(client)?;
    let app = router().layer(service).with_state(ctx);

    let listener = TcpListener::bind(config.bind).await?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router() -> Router<Context> {
    pages::router()
        .merge(features::router())
        .route("/openapi.json", get(api_doc))
}

async fn api_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }

    info!("shutting down");
}
