use noodles::core::Position;
use serde::Serialize;

use crate::{Region, region::serialize_position};

const CHAIN_TYPE: &str = "Chain";

/// An annotated span of a protein sequence.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    #[serde(serialize_with = "serialize_position")]
    pub start: Position,
    #[serde(serialize_with = "serialize_position")]
    pub end: Position,
}

impl Feature {
    pub fn new<T, D>(ty: T, description: D, start: Position, end: Position) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            ty: ty.into(),
            description: description.into(),
            start,
            end,
        }
    }

    /// Returns the description, or the type when there is no description.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.ty
        } else {
            &self.description
        }
    }

    /// Returns whether this feature annotates the whole polypeptide chain.
    pub fn is_chain(&self) -> bool {
        self.ty.trim().eq_ignore_ascii_case(CHAIN_TYPE)
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Returns whether this feature shares at least one position with the given region.
    ///
    /// Touching boundaries count as an intersection.
    pub fn intersects(&self, region: &Region) -> bool {
        self.start <= region.end() && region.start() <= self.end
    }
}
