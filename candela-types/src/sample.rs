use serde::{Deserialize, Serialize};

/// One raw candle record exactly as the footprint backend serializes it.
///
/// Every field arrives as a numeric string: `bucket` is seconds since the
/// epoch, the four price fields are decimal prices. Nothing here is
/// validated; upstream data quality issues (non-numeric fields, implausible
/// timestamps, outlier prices) are the sanitizer's problem, not serde's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample {
    /// Bucket start, seconds since the epoch, as a numeric string.
    pub bucket: String,
    /// Opening price as a numeric string.
    pub open: String,
    /// Highest price as a numeric string.
    pub high: String,
    /// Lowest price as a numeric string.
    pub low: String,
    /// Closing price as a numeric string.
    pub close: String,
}

impl RawSample {
    /// Convenience constructor, mostly for fixtures and tests.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
        }
    }
}
