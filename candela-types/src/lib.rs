//! Candela-specific data transfer objects and configuration primitives.
//!
//! Everything in this crate is plain data: the wire shape of the footprint
//! backend (`RawSample`), the strict internal types the pipeline trades in
//! (`Candle`, `CandleSeries`, `Viewport`, `Timeframe`), the workspace error
//! type (`CandelaError`), and the configuration structs consumed by the
//! sanitize/window core and the polling session.
#![warn(missing_docs)]

mod candle;
mod config;
mod error;
mod sample;
mod timeframe;
mod viewport;

pub use candle::{Candle, CandleSeries};
pub use config::{CandelaConfig, PollConfig, SanitizeConfig, WindowConfig, YearRange};
pub use error::CandelaError;
pub use sample::RawSample;
pub use timeframe::Timeframe;
pub use viewport::Viewport;
