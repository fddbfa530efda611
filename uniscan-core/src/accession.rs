use std::{fmt, str::FromStr};

use thiserror::Error;

/// A protein entry accession, e.g., "Q7Z4F1".
///
/// Only emptiness is checked locally. The remote service decides whether an accession exists.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Accession(String);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseAccessionError {
    #[error("empty input")]
    Empty,
}

impl FromStr for Accession {
    type Err = ParseAccessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            Err(ParseAccessionError::Empty)
        } else {
            Ok(Self(s.into()))
        }
    }
}

impl AsRef<str> for Accession {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
