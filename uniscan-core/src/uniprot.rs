//! UniProtKB JSON entries.
//!
//! The service nests feature positions as `location.start.value` and `location.end.value`. This
//! flattens them into [`Feature`]s so the rest of the crate never sees the upstream schema.
//!
//! Only the top level of an entry is strict. Each feature and the protein name are read leniently:
//! a feature that cannot be resolved is skipped, and a missing name is `None`.

use noodles::core::Position;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::{Entry, Feature};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid entry")]
    Invalid(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    #[serde(default)]
    protein_description: Option<Value>,
    #[serde(default)]
    features: Option<Vec<Value>>,
}

/// Parses a UniProtKB entry in JSON.
///
/// The entry must be a JSON object. Features without a known start and end position are skipped.
pub fn parse_entry(accession: &str, src: &[u8]) -> Result<Entry, ParseError> {
    let object: Map<String, Value> = serde_json::from_slice(src)?;
    let raw_entry: RawEntry = serde_json::from_value(Value::Object(object))?;

    let protein_name = raw_entry
        .protein_description
        .as_ref()
        .and_then(resolve_protein_name);

    let features = raw_entry
        .features
        .unwrap_or_default()
        .iter()
        .filter_map(|raw_feature| {
            let feature = resolve_feature(raw_feature);

            if feature.is_none() {
                warn!(accession, "skipping feature with an unknown location");
            }

            feature
        })
        .collect();

    Ok(Entry::new(accession.into(), protein_name, features))
}

fn resolve_protein_name(description: &Value) -> Option<String> {
    fn full_name(name: &Value) -> Option<&str> {
        name.pointer("/fullName/value")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    description
        .get("recommendedName")
        .and_then(full_name)
        .or_else(|| {
            description
                .get("submissionNames")?
                .as_array()?
                .iter()
                .find_map(full_name)
        })
        .map(String::from)
}

fn resolve_feature(raw_feature: &Value) -> Option<Feature> {
    let location = raw_feature.get("location")?;
    let start = resolve_position(location.get("start")?)?;
    let end = resolve_position(location.get("end")?)?;

    let ty = resolve_text(raw_feature.get("type"));
    let description = resolve_text(raw_feature.get("description"));

    Some(Feature::new(ty, description, start, end))
}

fn resolve_text(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).map(str::trim).unwrap_or_default()
}

fn resolve_position(position: &Value) -> Option<Position> {
    let n = match position.get("value")? {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;

    Position::new(n)
}
