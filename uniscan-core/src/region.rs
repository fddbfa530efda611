use std::fmt;

use noodles::core::Position;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A closed interval of 1-based residue positions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Region {
    #[serde(serialize_with = "serialize_position")]
    start: Position,
    #[serde(serialize_with = "serialize_position")]
    end: Position,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegionError {
    #[error("invalid start")]
    InvalidStart,
    #[error("invalid end")]
    InvalidEnd,
    #[error("end is before start")]
    EndBeforeStart,
}

impl Region {
    /// Creates a region from raw 1-based positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniscan_core::Region;
    ///
    /// let region = Region::new(494, 500)?;
    /// assert_eq!(region.to_string(), "494-500");
    /// # Ok::<_, uniscan_core::region::RegionError>(())
    /// ```
    pub fn new(start: usize, end: usize) -> Result<Self, RegionError> {
        let start = Position::new(start).ok_or(RegionError::InvalidStart)?;
        let end = Position::new(end).ok_or(RegionError::InvalidEnd)?;

        if end < start {
            return Err(RegionError::EndBeforeStart);
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

pub(crate) fn serialize_position<S>(position: &Position, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    usize::from(*position).serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert!(Region::new(494, 500).is_ok());
        assert!(Region::new(7, 7).is_ok());

        assert_eq!(Region::new(0, 500), Err(RegionError::InvalidStart));
        assert_eq!(Region::new(494, 0), Err(RegionError::InvalidEnd));
        assert_eq!(Region::new(500, 494), Err(RegionError::EndBeforeStart));
    }

    #[test]
    fn test_serialize() -> Result<(), Box<dyn std::error::Error>> {
        let region = Region::new(494, 500)?;
        let actual = serde_json::to_value(region)?;
        assert_eq!(actual, serde_json::json!({ "start": 494, "end": 500 }));

        let region = Region::new(usize::MAX - 1, usize::MAX)?;
        let actual = serde_json::to_value(region)?;
        assert_eq!(actual["end"].as_u64(), u64::try_from(usize::MAX).ok());

        Ok(())
    }
}
