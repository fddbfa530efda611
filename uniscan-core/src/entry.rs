use crate::{Feature, Region, features};

/// A protein entry and its annotated features, in the order the service listed them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub accession: String,
    pub protein_name: Option<String>,
    pub features: Vec<Feature>,
}

impl Entry {
    pub fn new(accession: String, protein_name: Option<String>, features: Vec<Feature>) -> Self {
        Self {
            accession,
            protein_name,
            features,
        }
    }

    /// Returns the features of this entry that overlap the given region.
    pub fn overlapping(&self, region: &Region) -> Vec<Feature> {
        features::filter(&self.features, region)
    }
}
