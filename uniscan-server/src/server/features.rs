use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use uniscan_core::{Accession, Region};

use crate::{
    lookup::{self, Lookup},
    server::{self, Context, Error},
};

pub fn router() -> Router<Context> {
    Router::new().route("/api/entries/{accession}/features", get(index))
}

#[derive(Deserialize)]
struct IndexQuery {
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct IndexBody {
    lookup: Lookup,
}

/// Lists the features of an entry that overlap a region.
///
/// Chain features are never listed.
#[utoipa::path(
    get,
    path = "/api/entries/{accession}/features",
    operation_id = "entries-features-index",
    params(
        ("accession" = String, Path, description = "UniProtKB accession"),
        ("start" = usize, Query, description = "Start position of the region (1-based, inclusive)"),
        ("end" = usize, Query, description = "End position of the region (1-based, inclusive)"),
    ),
    responses(
        (status = OK, description = "Features overlapping the given region"),
        (status = BAD_REQUEST, description = "The region is invalid"),
        (status = NOT_FOUND, description = "The accession does not exist"),
        (status = BAD_GATEWAY, description = "UniProt could not be reached or sent an unexpected response"),
    ),
)]
async fn index(
    State(ctx): State<Context>,
    Path(accession): Path<String>,
    Query(params): Query<IndexQuery>,
) -> server::Result<Json<IndexBody>> {
    let accession: Accession = accession
        .parse()
        .map_err(|e| Error::InvalidRequest(format!("invalid accession: {e}")))?;

    let region = Region::new(params.start, params.end)
        .map_err(|e| Error::InvalidRequest(format!("invalid region: {e}")))?;

    let lookup = lookup::lookup(&ctx.client, &accession, region).await?;

    Ok(Json(IndexBody { lookup }))
}
