use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const PROTEIN_NAME: &str = "Low-density lipoprotein receptor-related protein 10";

fn position(value: Option<u64>) -> Value {
    match value {
        Some(n) => json!({ "value": n, "modifier": "EXACT" }),
        None => json!({ "value": null, "modifier": "UNKNOWN" }),
    }
}

fn feature(ty: &str, description: &str, start: Option<u64>, end: Option<u64>) -> Value {
    json!({
        "type": ty,
        "location": {
            "start": position(start),
            "end": position(end),
        },
        "description": description,
    })
}

/// A UniProtKB entry with overlapping, chain, unknown-position and malformed features.
pub fn entry() -> Value {
    json!({
        "entryType": "UniProtKB reviewed (Swiss-Prot)",
        "primaryAccession": "Q7Z4F1",
        "proteinDescription": {
            "recommendedName": {
                "fullName": { "value": PROTEIN_NAME },
            },
        },
        "features": [
            feature("Domain", "Ig-like", Some(490), Some(496)),
            feature("Chain", PROTEIN_NAME, Some(1), Some(600)),
            feature("Glycosylation", "N-linked (GlcNAc...) asparagine", None, Some(140)),
            feature("Binding site", "", Some(498), Some(502)),
            feature("Site", "Cleavage", Some(500), Some(499)),
        ],
    })
}

/// Starts a mock UniProt service that knows only Q7Z4F1.
pub async fn uniprot() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/Q7Z4F1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry()))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}
