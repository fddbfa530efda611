//! UniProtKB REST client.

mod error;

use std::time::Duration;

use reqwest::{StatusCode, Url, header};
use tracing::{debug, info};
use uniscan_core::{Accession, Entry, uniprot};

pub use self::error::{BuildError, FetchError, FetchErrorKind};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for the UniProtKB entry endpoint.
///
/// Every call to [`Client::fetch`] makes exactly one request. Nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, BuildError> {
        if base_url.cannot_be_a_base() {
            return Err(BuildError::InvalidBaseUrl);
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// Fetches an entry and its features.
    pub async fn fetch(&self, accession: &Accession) -> Result<Entry, FetchError> {
        let url = self.entry_url(accession);

        info!(%accession, %url, "fetching entry");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            // UniProt answers 400 for accessions it cannot resolve.
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
                return Err(FetchError::NotFound(accession.clone()));
            }
            status => return Err(FetchError::UnexpectedStatus(status)),
        }

        let body = response.bytes().await?;
        let entry = uniprot::parse_entry(accession.as_ref(), &body)?;

        debug!(%accession, feature_count = entry.features.len(), "fetched entry");

        Ok(entry)
    }

    fn entry_url(&self, accession: &Accession) -> Url {
        let mut url = self.base_url.clone();

        // `base_url` is checked to be a base in `Client::new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("uniprotkb")
                .push(&format!("{accession}.json"));
        }

        url
    }
}
