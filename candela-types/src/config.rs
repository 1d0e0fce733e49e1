//! Configuration types shared across the sanitize/window core and the session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Inclusive calendar-year range a candle timestamp must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Earliest plausible year (inclusive).
    pub min: i32,
    /// Latest plausible year (inclusive).
    pub max: i32,
}

impl YearRange {
    /// `true` when `year` lies inside the range.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 2000,
            max: 2050,
        }
    }
}

/// Bounds applied by the sanitizer when filtering raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanitizeConfig {
    /// Calendar years a bucket timestamp may fall into.
    pub plausible_years: YearRange,
    /// Upper sanity bound for all four price fields; prices must also be
    /// strictly positive.
    pub price_ceiling: f64,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            plausible_years: YearRange::default(),
            price_ceiling: 100_000.0,
        }
    }
}

/// Shape of the visible window computed by the windower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Maximum number of candles shown at once.
    pub max_visible: usize,
    /// Margin added below the window's lowest low and above its highest high.
    pub padding: f64,
    /// Vertical offset subtracted from both extent bounds.
    pub y_offset: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_visible: 15,
            padding: 0.5,
            y_offset: 0.0,
        }
    }
}

/// Cadence of the polling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between consecutive history fetches for the selected timeframe.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
        }
    }
}

/// Global configuration for the candela session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CandelaConfig {
    /// Bounds applied when filtering raw samples.
    pub sanitize: SanitizeConfig,
    /// Shape of the visible window.
    pub window: WindowConfig,
    /// Polling cadence.
    pub poll: PollConfig,
}
