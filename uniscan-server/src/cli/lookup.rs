use clap::{Parser, ValueEnum};
use uniscan_core::Accession;

use super::ClientConfig;

#[derive(Debug, Parser)]
pub struct LookupConfig {
    /// The UniProtKB accession, e.g., "Q7Z4F1", "P12345", etc.
    pub accession: Accession,

    /// The start position of the region (1-based, inclusive).
    #[clap(long)]
    pub start: usize,

    /// The end position of the region (1-based, inclusive).
    #[clap(long)]
    pub end: usize,

    /// The output format.
    #[clap(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    #[clap(flatten)]
    pub client: ClientConfig,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// A JSON object.
    Json,
    /// A summary line followed by a table of features.
    Table,
}
