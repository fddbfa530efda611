//! The fetch-then-filter pipeline and the state it produces.

use serde::Serialize;
use tracing::warn;
use uniscan_core::{Accession, Feature, Region, features};

use crate::fetcher::{Client, FetchError};

/// The features of an entry that overlap a region.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    pub accession: String,
    pub protein_name: Option<String>,
    pub region: Region,
    pub features: Vec<Feature>,
    pub summary: Option<String>,
}

/// The state of a single lookup view.
///
/// This is written once by the handler of a lookup and only read by the renderer.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupState {
    Idle,
    Loaded(Lookup),
    Failed { message: String },
}

/// Fetches an entry and keeps the features that overlap the given region.
pub async fn lookup(
    client: &Client,
    accession: &Accession,
    region: Region,
) -> Result<Lookup, FetchError> {
    let entry = client.fetch(accession).await?;

    let malformed_feature_count = entry
        .features
        .iter()
        .filter(|feature| !feature.is_well_formed())
        .count();

    if malformed_feature_count > 0 {
        warn!(%accession, malformed_feature_count, "skipping features that end before they start");
    }

    let features = entry.overlapping(&region);
    let summary = features::summarize(&features);

    Ok(Lookup {
        accession: entry.accession,
        protein_name: entry.protein_name,
        region,
        features,
        summary,
    })
}
