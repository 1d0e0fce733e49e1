//! Candela drives a real-time candlestick chart from a polled history source.
//!
//! Overview
//! - Polls a `candela_core` history source on a fixed cadence, one timer per
//!   subscription, and stores the latest raw snapshot (last writer wins).
//! - Projects every snapshot from scratch through the sanitize/window core
//!   into a [`ChartFrame`]: a whole-sequence recompute with no incremental
//!   state to corrupt.
//! - Feeds frames to a [`ChartSurface`] (the external renderer seam), with
//!   degenerate snapshots degrading to the loading state instead of erroring.
//!
//! Key behaviors and trade-offs
//! - Polling, not push: a fixed-interval timer invoking an idempotent
//!   refresh keeps the backend contract trivial at the cost of one request
//!   per tick.
//! - Fetches are awaited inside the poll loop, so a slow response delays the
//!   next tick rather than racing it; stale responses can never overwrite
//!   fresher ones.
//! - Fetch failures are logged and published as an empty snapshot: the chart
//!   shows "loading", never a crash.
//! - Switching timeframe stops the previous subscription's timer before the
//!   new one starts; dropping a subscription aborts its timer outright.
//!
//! Examples
//! Building a session against the HTTP connector:
//! ```rust,ignore
//! use std::sync::Arc;
//! use candela::{Candela, LogSurface, drive};
//! use candela_types::Timeframe;
//!
//! let source = Arc::new(candela_footprint::FootprintConnector::from_base_url(
//!     "http://localhost:5000",
//! )?);
//!
//! let candela = Candela::builder()
//!     .with_source(source)
//!     .poll_interval(std::time::Duration::from_millis(1000))
//!     .max_visible(15)
//!     .build()?;
//!
//! let mut sub = candela.subscribe(Timeframe::M1);
//! let mut surface = LogSurface::default();
//! drive(&mut sub, &mut surface).await;
//! ```
//!
//! Switching the selected timeframe:
//! ```rust,ignore
//! let sub = candela.subscribe(Timeframe::M1);
//! // ... later, the selector emits "15m":
//! let sub = candela.switch(sub, Timeframe::M15).await;
//! ```
//!
//! See `candela/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod session;
mod surface;

pub use core::{Candela, CandelaBuilder};
pub use session::{Snapshot, Subscription, drive};
pub use surface::LogSurface;

// Re-export core types for convenience
pub use candela_core::{
    // Pipeline
    ChartFrame,
    ChartSurface,
    DepthScale,
    HistorySource,
    project,
    sanitize,
    viewport,

    // Foundational types
    Candle,
    CandleSeries,
    CandelaConfig,
    CandelaError,
    PollConfig,
    RawSample,
    SanitizeConfig,
    Timeframe,
    Viewport,
    WindowConfig,
    YearRange,
};
