use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uniscan_core::{Accession, Region, region::RegionError};

use crate::{
    Client,
    fetcher::{FetchError, FetchErrorKind},
    lookup::{self, LookupState},
    server::{self, Context},
};

const INDEX_TEMPLATE_NAME: &str = "index.html";

const DEFAULT_ACCESSION: &str = "Q7Z4F1";
const DEFAULT_START: &str = "494";
const DEFAULT_END: &str = "500";

pub fn router() -> Router<Context> {
    Router::new().route("/", get(index))
}

pub(super) fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(
        INDEX_TEMPLATE_NAME,
        include_str!("../../templates/index.html"),
    )?;
    Ok(env)
}

/// The raw lookup form fields.
///
/// Positions are kept as text so that invalid input is reported on the page rather than
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
struct IndexQuery {
    accession: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

#[derive(Serialize)]
struct FormValues<'a> {
    accession: &'a str,
    start: &'a str,
    end: &'a str,
}

async fn index(
    State(ctx): State<Context>,
    Query(params): Query<IndexQuery>,
) -> server::Result<Html<String>> {
    let state = match params.accession.as_deref() {
        Some(accession) => {
            run(
                &ctx.client,
                accession,
                params.start.as_deref(),
                params.end.as_deref(),
            )
            .await
        }
        None => LookupState::Idle,
    };

    let form = FormValues {
        accession: params.accession.as_deref().unwrap_or(DEFAULT_ACCESSION),
        start: params.start.as_deref().unwrap_or(DEFAULT_START),
        end: params.end.as_deref().unwrap_or(DEFAULT_END),
    };

    let template = ctx.templates.get_template(INDEX_TEMPLATE_NAME)?;
    let html = template.render(context! { form, state })?;

    Ok(Html(html))
}

async fn run(
    client: &Client,
    accession: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> LookupState {
    let (accession, region) = match parse_request(accession, start, end) {
        Ok(request) => request,
        Err(message) => return LookupState::Failed { message },
    };

    match lookup::lookup(client, &accession, region).await {
        Ok(lookup) => LookupState::Loaded(lookup),
        Err(e) => {
            warn!(%accession, "lookup failed: {e:?}");

            LookupState::Failed {
                message: fetch_error_message(&accession, &e),
            }
        }
    }
}

fn parse_request(
    accession: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Accession, Region), String> {
    const INVALID_START: &str = "Start position must be a positive integer.";
    const INVALID_END: &str = "End position must be a positive integer.";

    let accession: Accession = accession
        .parse()
        .map_err(|_| String::from("Please enter a UniProt ID."))?;

    let start = parse_position(start).ok_or(INVALID_START)?;
    let end = parse_position(end).ok_or(INVALID_END)?;

    let region = Region::new(start, end).map_err(|e| match e {
        RegionError::InvalidStart => INVALID_START,
        RegionError::InvalidEnd => INVALID_END,
        RegionError::EndBeforeStart => "End position must be ≥ start position.",
    })?;

    Ok((accession, region))
}

fn parse_position(s: Option<&str>) -> Option<usize> {
    s.and_then(|s| s.trim().parse().ok())
}

fn fetch_error_message(accession: &Accession, e: &FetchError) -> String {
    match e.kind() {
        FetchErrorKind::NotFound => format!("UniProt entry {accession} was not found."),
        FetchErrorKind::Network => String::from("Could not reach UniProt. Try again later."),
        FetchErrorKind::Malformed => {
            String::from("UniProt sent a response in an unexpected format.")
        }
    }
}
