use candela_core::ChartSurface;
use candela_types::{CandleSeries, Viewport};

/// Chart surface that logs frames through `tracing` instead of drawing.
///
/// Useful as the renderer seam in examples, smoke tests, and headless
/// deployments; real drawing surfaces live outside this workspace.
#[derive(Debug, Default)]
pub struct LogSurface {
    depth_scale: Option<f64>,
}

impl ChartSurface for LogSurface {
    fn render(&mut self, series: &CandleSeries, viewport: &Viewport) {
        let last_close = series.last().map(|c| c.close);
        tracing::info!(
            candles = series.len(),
            visible = viewport.visible_count(),
            start = viewport.start,
            y_min = viewport.y_min,
            y_max = viewport.y_max,
            last_close,
            depth_scale = self.depth_scale,
            "render frame"
        );
    }

    fn render_loading(&mut self) {
        tracing::info!("render loading state");
    }

    fn set_depth_scale(&mut self, factor: f64) {
        self.depth_scale = Some(factor);
    }
}
