//! Re-export of foundational types from `candela-types`.
// Consolidated re-exports so downstream crates can depend on `candela-core` only

pub use candela_types::{
    Candle, CandleSeries, CandelaConfig, CandelaError, PollConfig, RawSample, SanitizeConfig,
    Timeframe, Viewport, WindowConfig, YearRange,
};
