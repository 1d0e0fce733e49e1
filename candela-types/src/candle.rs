use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully validated OHLC candle.
///
/// Produced only by the sanitizer: all four prices are finite, strictly
/// positive, and at or below the configured ceiling, and `ts` falls inside
/// the configured plausible year range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket start time.
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

/// A candle sequence ordered by non-decreasing timestamp.
///
/// Ordering is the only structural invariant: duplicate timestamps are
/// allowed and keep their relative arrival order. The wrapper owns its
/// candles; consumers read through [`as_slice`](Self::as_slice) or the
/// indexed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandleSeries(Vec<Candle>);

impl CandleSeries {
    /// Build a series from candles in arbitrary order.
    ///
    /// Candles are stable-sorted by timestamp, so equal-timestamp entries
    /// keep the relative order they were supplied in.
    #[must_use]
    pub fn new(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.ts);
        Self(candles)
    }

    /// The empty series, the defined "no data yet" state.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of candles in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the series holds no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candle at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.0.get(index)
    }

    /// The most recent candle, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Candle> {
        self.0.last()
    }

    /// Iterate over candles in timestamp order.
    pub fn iter(&self) -> core::slice::Iter<'_, Candle> {
        self.0.iter()
    }

    /// Borrow the ordered candles as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Candle] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = core::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
