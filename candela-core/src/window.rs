use candela_types::{CandleSeries, Viewport, WindowConfig};

/// Compute the visible window over `series`, anchored to the newest candle.
///
/// The window covers the most recent `min(cfg.max_visible, series.len())`
/// candles, with `end` one past the final index so the latest candle is the
/// rightmost visible entry. The vertical extent spans exactly the candles in
/// the window: `y_min = min(low) - padding - y_offset`,
/// `y_max = max(high) + padding - y_offset`.
///
/// Returns `None` while the series is empty (or the configured window has
/// zero width): the "not ready" signal callers must check before asking for
/// extents. Pure function of its inputs; recompute it whenever the visible
/// candle set changes.
#[must_use]
pub fn viewport(series: &CandleSeries, cfg: &WindowConfig) -> Option<Viewport> {
    let len = series.len();
    let visible = cfg.max_visible.min(len);
    if visible == 0 {
        return None;
    }

    let end = len;
    let start = end - visible;

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for candle in &series.as_slice()[start..end] {
        y_min = y_min.min(candle.low);
        y_max = y_max.max(candle.high);
    }

    Some(Viewport {
        start,
        end,
        y_min: y_min - cfg.padding - cfg.y_offset,
        y_max: y_max + cfg.padding - cfg.y_offset,
    })
}
