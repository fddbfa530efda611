use reqwest::StatusCode;
use thiserror::Error;
use uniscan_core::{Accession, uniprot::ParseError};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("entry not found: {0}")]
    NotFound(Accession),
    #[error("request failed")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("malformed response")]
    Malformed(#[from] ParseError),
}

/// The user-facing classes of fetch failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchErrorKind {
    /// The service does not know the accession.
    NotFound,
    /// The service could not be reached or did not answer successfully.
    Network,
    /// The response body is not an entry.
    Malformed,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::NotFound(_) => FetchErrorKind::NotFound,
            Self::Network(_) | Self::UnexpectedStatus(_) => FetchErrorKind::Network,
            Self::Malformed(_) => FetchErrorKind::Malformed,
        }
    }
}
