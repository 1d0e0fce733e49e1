use candela_types::{CandleSeries, Viewport};

/// Render-side collaborator fed by a session's drive loop.
///
/// The surface owns everything pixel-level: drawing candles and axes,
/// tooltips, and its own pan/zoom gestures. The pipeline hands it a
/// sanitized series plus the visible window and otherwise stays out of
/// rendering concerns.
pub trait ChartSurface: Send {
    /// Paint a ready frame: ordered candles plus the visible window.
    fn render(&mut self, series: &CandleSeries, viewport: &Viewport);

    /// Paint the loading state shown before the first good snapshot.
    fn render_loading(&mut self);

    /// Observe the cosmetic depth-scale factor.
    ///
    /// Default: ignore it. Surfaces that apply a perspective transform
    /// override this.
    fn set_depth_scale(&mut self, factor: f64) {
        let _ = factor;
    }
}
