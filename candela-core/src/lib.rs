//! candela-core
//!
//! Core traits and pure pipeline logic shared across the candela ecosystem.
//!
//! - `source`: the `HistorySource` trait implemented by data connectors.
//! - `surface`: the `ChartSurface` trait implemented by renderers.
//! - `sanitize`, `window`, `frame`: the pure projection from raw backend
//!   samples to a drawable chart frame.
//! - `scale`: the cosmetic depth-scale factor driven by wheel gestures.
//! - `poll`: the task handle owned by a polling session.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. `poll::PollHandle`
//! wraps `tokio::task::JoinHandle<()>` and uses `tokio::sync::oneshot::Sender<()>`
//! for cooperative shutdown, so code that runs polling sessions must execute
//! under a Tokio 1.x runtime. The sanitize/window/frame modules are pure and
//! runtime-free.
#![warn(missing_docs)]

/// Projection of sanitized series into drawable frames.
pub mod frame;
/// Poll-task handle used by polling sessions.
pub mod poll;
/// Raw-sample parsing, validation, and ordering.
pub mod sanitize;
/// Cosmetic depth-scale control.
pub mod scale;
/// The `HistorySource` contract implemented by data connectors.
pub mod source;
/// The `ChartSurface` contract implemented by renderers.
pub mod surface;
pub mod types;
/// Visible-window and vertical-extent computation.
pub mod window;

pub use frame::{ChartFrame, project};
pub use sanitize::{RejectReason, sanitize};
pub use scale::DepthScale;
pub use source::HistorySource;
pub use surface::ChartSurface;
pub use types::*;
pub use window::viewport;
