//! Byte order for multi-byte numeric values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Byte order used when encoding and decoding multi-byte numbers.
///
/// Single bytes and UTF-8 text are not affected by the byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Endian {
    /// Most significant byte first.
    #[default]
    #[serde(rename = "bigEndian")]
    Big,
    /// Least significant byte first.
    #[serde(rename = "littleEndian")]
    Little,
}

impl Endian {
    /// Symbolic name of the big-endian mode.
    pub const BIG_ENDIAN: &'static str = "bigEndian";
    /// Symbolic name of the little-endian mode.
    pub const LITTLE_ENDIAN: &'static str = "littleEndian";

    /// Returns the symbolic name of this byte order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endian::Big => Self::BIG_ENDIAN,
            Endian::Little => Self::LITTLE_ENDIAN,
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown byte order name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown endian: {0:?}")]
pub struct ParseEndianError(pub String);

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::BIG_ENDIAN => Ok(Endian::Big),
            Self::LITTLE_ENDIAN => Ok(Endian::Little),
            other => Err(ParseEndianError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_big() {
        assert_eq!(Endian::default(), Endian::Big);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Endian::Big.to_string(), "bigEndian");
        assert_eq!(Endian::Little.to_string(), "littleEndian");
        assert_eq!("bigEndian".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("littleEndian".parse::<Endian>().unwrap(), Endian::Little);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "middleEndian".parse::<Endian>().unwrap_err();
        assert_eq!(err, ParseEndianError("middleEndian".into()));
        assert!(err.to_string().contains("middleEndian"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Endian::Little).unwrap(), r#""littleEndian""#);
        let e: Endian = serde_json::from_str(r#""bigEndian""#).unwrap();
        assert_eq!(e, Endian::Big);
    }
}
