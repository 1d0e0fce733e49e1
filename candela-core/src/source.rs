use async_trait::async_trait;

use candela_types::{CandelaError, RawSample, Timeframe};

/// Contract implemented by anything that can serve footprint history.
///
/// Implementations return the backend's raw, untyped records; parsing and
/// validation happen downstream in [`sanitize`](crate::sanitize). Failures
/// are typed: degrading a failure to an empty snapshot is the polling
/// session's decision, not the source's.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// A stable identifier used in logs and source-tagged errors
    /// (e.g. "candela-footprint").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch every raw candle record currently known for `timeframe`.
    async fn history(&self, timeframe: Timeframe) -> Result<Vec<RawSample>, CandelaError>;

    /// Exact timeframes this source can natively serve.
    ///
    /// Default: all six selector timeframes.
    fn supported_timeframes(&self) -> &'static [Timeframe] {
        Timeframe::all()
    }
}
