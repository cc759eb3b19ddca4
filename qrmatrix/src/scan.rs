use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Traversal order over every cell of a matrix.
///
/// The visit coordinates are always `(w, h)` whichever axis is outermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanDirection {
    /// Outer loop over the height axis, inner loop over the width axis.
    Row,
    /// Outer loop over the width axis, inner loop over the height axis.
    Column,
}

impl ScanDirection {
    /// Numeric code: `1` for row-first, `2` for column-first.
    pub fn code(self) -> u8 {
        match self {
            ScanDirection::Row => 1,
            ScanDirection::Column => 2,
        }
    }
}

impl TryFrom<u8> for ScanDirection {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ScanDirection::Row),
            2 => Ok(ScanDirection::Column),
            _ => Err(ParseError::UnknownDirection(code)),
        }
    }
}

impl FromStr for ScanDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "row" => Ok(ScanDirection::Row),
            "column" | "col" => Ok(ScanDirection::Column),
            _ => Err(ParseError::UnknownDirectionName(s.to_string())),
        }
    }
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanDirection::Row => "row",
            ScanDirection::Column => "column",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for dir in [ScanDirection::Row, ScanDirection::Column] {
            assert_eq!(ScanDirection::try_from(dir.code()), Ok(dir));
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(
            ScanDirection::try_from(0),
            Err(ParseError::UnknownDirection(0))
        );
        assert_eq!(
            ScanDirection::try_from(3),
            Err(ParseError::UnknownDirection(3))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("row".parse(), Ok(ScanDirection::Row));
        assert_eq!("Column".parse(), Ok(ScanDirection::Column));
        assert_eq!("col".parse(), Ok(ScanDirection::Column));
        assert!("diagonal".parse::<ScanDirection>().is_err());
    }
}
