//! Protein feature lookup by residue region.

mod accession;
mod entry;
pub mod features;
pub mod region;
pub mod uniprot;

pub use self::{
    accession::{Accession, ParseAccessionError},
    entry::Entry,
    features::Feature,
    region::Region,
};
