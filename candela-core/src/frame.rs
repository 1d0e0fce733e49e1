use serde::Serialize;

use candela_types::{CandleSeries, RawSample, SanitizeConfig, Viewport, WindowConfig};

use crate::{sanitize, window};

/// What a render driver hands to the chart surface.
///
/// `Loading` covers every degenerate input: no snapshot yet, an empty
/// response, or a batch whose records were all rejected. There is no error
/// variant; anything that cannot produce a viewport renders as loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartFrame {
    /// Awaiting the first snapshot that survives sanitization.
    Loading,
    /// A drawable frame.
    Ready {
        /// Sanitized candles in timestamp order.
        series: CandleSeries,
        /// Visible window over `series`.
        viewport: Viewport,
    },
}

impl ChartFrame {
    /// `true` when the frame carries drawable data.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The viewport, when ready.
    #[must_use]
    pub const fn viewport(&self) -> Option<&Viewport> {
        match self {
            Self::Ready { viewport, .. } => Some(viewport),
            Self::Loading => None,
        }
    }

    /// The sanitized series, when ready.
    #[must_use]
    pub const fn series(&self) -> Option<&CandleSeries> {
        match self {
            Self::Ready { series, .. } => Some(series),
            Self::Loading => None,
        }
    }
}

/// Project one raw snapshot into a chart frame.
///
/// Composes [`sanitize`](crate::sanitize::sanitize) and
/// [`viewport`](crate::window::viewport). Total and deterministic: the same
/// raw input always yields an identical frame, and no input makes it fail
/// since degenerate snapshots degrade to [`ChartFrame::Loading`].
#[must_use]
pub fn project(
    samples: &[RawSample],
    sanitize_cfg: &SanitizeConfig,
    window_cfg: &WindowConfig,
) -> ChartFrame {
    let series = sanitize::sanitize(samples, sanitize_cfg);
    match window::viewport(&series, window_cfg) {
        Some(viewport) => ChartFrame::Ready { series, viewport },
        None => ChartFrame::Loading,
    }
}
