use serde::{Deserialize, Serialize};

/// The visible window over a [`CandleSeries`](crate::CandleSeries).
///
/// `start..end` indexes the series and is anchored so the newest candle is
/// the rightmost visible entry (`end` equals the series length). The vertical
/// extent covers every candle in the window with the configured padding
/// already applied on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// First visible candle index (inclusive).
    pub start: usize,
    /// One past the last visible candle index.
    pub end: usize,
    /// Lower bound of the padded vertical extent.
    pub y_min: f64,
    /// Upper bound of the padded vertical extent.
    pub y_max: f64,
}

impl Viewport {
    /// Number of candles inside the window.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.end - self.start
    }

    /// The window as an index range into the series.
    #[must_use]
    pub const fn range(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }

    /// `true` when `index` falls inside the visible window.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}
