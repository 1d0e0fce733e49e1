use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CandelaError;

/// Aggregation timeframe served by the footprint backend.
///
/// The backend exposes exactly these six bucket widths; the label returned by
/// [`Timeframe::as_str`] is the path segment of the history endpoint and the
/// value emitted by the timeframe selector UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    /// One-minute buckets.
    #[default]
    #[serde(rename = "1m")]
    M1,
    /// Three-minute buckets.
    #[serde(rename = "3m")]
    M3,
    /// Five-minute buckets.
    #[serde(rename = "5m")]
    M5,
    /// Fifteen-minute buckets.
    #[serde(rename = "15m")]
    M15,
    /// One-hour buckets.
    #[serde(rename = "1h")]
    H1,
    /// Four-hour buckets.
    #[serde(rename = "4h")]
    H4,
}

impl Timeframe {
    /// Canonical label, identical to the endpoint path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M3 => "3m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
        }
    }

    /// Bucket width in seconds.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::M1 => 60,
            Self::M3 => 3 * 60,
            Self::M5 => 5 * 60,
            Self::M15 => 15 * 60,
            Self::H1 => 60 * 60,
            Self::H4 => 4 * 60 * 60,
        }
    }

    /// All supported timeframes, in ascending bucket width.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::M1, Self::M3, Self::M5, Self::M15, Self::H1, Self::H4]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = CandelaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::M1),
            "3m" => Ok(Self::M3),
            "5m" => Ok(Self::M5),
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "4h" => Ok(Self::H4),
            other => Err(CandelaError::InvalidArg(format!(
                "unknown timeframe label: {other:?}"
            ))),
        }
    }
}
