//! Block height newtype and its validation error.
//!
//! A [`Height`] is the only external input to every derivation in the
//! workspace. It is always a whole number: fractional, non-finite or
//! out-of-range values are rejected with [`InvalidHeight`] at the boundary
//! where untyped input (floats, JSON numbers, strings) enters the system.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 2^53. Beyond this magnitude an `f64` no longer represents every integer.
const MAX_EXACT_F64_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A block height was missing, fractional, or otherwise not a valid integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid block height: {reason}")]
pub struct InvalidHeight {
    /// Explanation of what is wrong with the supplied height.
    pub reason: String,
}

impl InvalidHeight {
    /// Create a new error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The error raised when a deriver that requires an explicit height is
    /// constructed without one.
    pub fn missing() -> Self {
        Self::new("block height must be an integer, got nothing")
    }
}

/// A block height. Negative values are permitted and denote heights
/// "before genesis".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "serde_json::Number", into = "i64")]
#[ts(export, export_to = "bindings/")]
pub struct Height(#[ts(type = "number")] i64);

impl Height {
    /// Height of the genesis block.
    pub const GENESIS: Self = Self(0);

    /// Wrap a raw integer height.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw integer value.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Return `true` for heights at or after genesis.
    pub const fn is_after_genesis(self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Height {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Height> for i64 {
    fn from(height: Height) -> Self {
        height.0
    }
}

impl TryFrom<f64> for Height {
    type Error = InvalidHeight;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InvalidHeight::new(format!(
                "block height must be an integer, got {value}"
            )));
        }
        if value.fract() != 0.0 {
            return Err(InvalidHeight::new(format!(
                "block height must be an integer, got {value}"
            )));
        }
        if value.abs() > MAX_EXACT_F64_INTEGER {
            return Err(InvalidHeight::new(format!(
                "block height {value} is outside the exactly representable range"
            )));
        }
        // Whole and within +/-2^53, so the cast is exact.
        Ok(Self(value as i64))
    }
}

impl TryFrom<serde_json::Number> for Height {
    type Error = InvalidHeight;

    fn try_from(number: serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(value) = number.as_i64() {
            return Ok(Self(value));
        }
        if number.is_u64() {
            return Err(InvalidHeight::new(format!(
                "block height {number} exceeds the supported range"
            )));
        }
        number.as_f64().map_or_else(
            || {
                Err(InvalidHeight::new(format!(
                    "block height must be an integer, got {number}"
                )))
            },
            Self::try_from,
        )
    }
}

impl FromStr for Height {
    type Err = InvalidHeight;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self(value));
        }
        trimmed.parse::<f64>().map_or_else(
            |_err| {
                Err(InvalidHeight::new(format!(
                    "block height must be an integer, got {trimmed:?}"
                )))
            },
            Self::try_from,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_are_accepted() {
        assert_eq!(Height::try_from(100_000.0).unwrap(), Height::new(100_000));
        assert_eq!(Height::try_from(-1.0).unwrap(), Height::new(-1));
    }

    #[test]
    fn fractional_floats_are_rejected() {
        let err = Height::try_from(1.5).unwrap_err();
        assert!(err.reason.contains("must be an integer"));
        assert!(Height::try_from(100_000.5).is_err());
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Height::try_from(f64::NAN).is_err());
        assert!(Height::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn huge_floats_are_rejected() {
        assert!(Height::try_from(1.0e300).is_err());
    }

    #[test]
    fn parses_from_strings() {
        assert_eq!("901152".parse::<Height>().unwrap(), Height::new(901_152));
        assert_eq!(" -42 ".parse::<Height>().unwrap(), Height::new(-42));
        assert_eq!("7.0".parse::<Height>().unwrap(), Height::new(7));
        assert!("1.5".parse::<Height>().is_err());
        assert!("100000".parse::<Height>().is_ok());
        assert!("one hundred".parse::<Height>().is_err());
    }

    #[test]
    fn deserializes_from_json_numbers() {
        let height: Height = serde_json::from_str("901152").unwrap();
        assert_eq!(height.value(), 901_152);

        let err = serde_json::from_str::<Height>("1.5").unwrap_err();
        assert!(err.to_string().contains("must be an integer"));

        assert!(serde_json::from_str::<Height>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Height>("\"100\"").is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Height::new(-7)).unwrap();
        assert_eq!(json, "-7");
    }

    #[test]
    fn genesis_is_zero_and_after_genesis() {
        assert_eq!(Height::GENESIS.value(), 0);
        assert!(Height::GENESIS.is_after_genesis());
        assert!(!Height::new(-1).is_after_genesis());
        assert_eq!(Height::default(), Height::GENESIS);
    }
}
