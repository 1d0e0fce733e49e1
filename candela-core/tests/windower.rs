use candela_core::viewport;
use candela_types::{Candle, CandleSeries, WindowConfig};
use chrono::{DateTime, Utc};

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid test timestamp")
}

fn candle(secs: i64, low: f64, high: f64) -> Candle {
    Candle {
        ts: ts(secs),
        open: low,
        high,
        low,
        close: high,
    }
}

fn series(count: usize) -> CandleSeries {
    let candles = (0..count)
        .map(|i| {
            let base = 100.0 + i as f64;
            candle(1_700_000_000 + i as i64 * 60, base, base + 2.0)
        })
        .collect();
    CandleSeries::new(candles)
}

#[test]
fn empty_series_is_not_ready() {
    let cfg = WindowConfig::default();
    assert!(viewport(&CandleSeries::empty(), &cfg).is_none());
}

#[test]
fn zero_width_window_is_not_ready() {
    let cfg = WindowConfig {
        max_visible: 0,
        ..WindowConfig::default()
    };
    assert!(viewport(&series(5), &cfg).is_none());
}

#[test]
fn short_series_is_fully_visible() {
    let cfg = WindowConfig::default();
    let vp = viewport(&series(7), &cfg).expect("ready");

    assert_eq!(vp.start, 0);
    assert_eq!(vp.end, 7);
    assert_eq!(vp.visible_count(), 7);
}

#[test]
fn long_series_shows_the_most_recent_candles() {
    let cfg = WindowConfig::default();
    let vp = viewport(&series(20), &cfg).expect("ready");

    // 20 candles, max 15: indices [5, 20).
    assert_eq!(vp.start, 5);
    assert_eq!(vp.end, 20);
    assert_eq!(vp.visible_count(), 15);
    assert!(vp.contains(19));
    assert!(!vp.contains(4));
}

#[test]
fn vertical_extent_spans_the_window_with_padding() {
    let cfg = WindowConfig::default();
    let s = series(20);
    let vp = viewport(&s, &cfg).expect("ready");

    // Lows run 105..119, highs 107..121 inside the window.
    assert!((vp.y_min - (105.0 - 0.5)).abs() < 1e-9);
    assert!((vp.y_max - (121.0 + 0.5)).abs() < 1e-9);

    for c in &s.as_slice()[vp.range()] {
        assert!(vp.y_min <= c.low);
        assert!(vp.y_max >= c.high);
    }
}

#[test]
fn extent_ignores_candles_outside_the_window() {
    let cfg = WindowConfig {
        max_visible: 2,
        ..WindowConfig::default()
    };
    let s = CandleSeries::new(vec![
        candle(100, 1.0, 500.0),
        candle(160, 90.0, 95.0),
        candle(220, 91.0, 96.0),
    ]);
    let vp = viewport(&s, &cfg).expect("ready");

    assert_eq!(vp.start, 1);
    assert!((vp.y_min - 89.5).abs() < 1e-9);
    assert!((vp.y_max - 96.5).abs() < 1e-9);
}

#[test]
fn y_offset_shifts_both_bounds() {
    let cfg = WindowConfig {
        y_offset: 2.0,
        ..WindowConfig::default()
    };
    let s = CandleSeries::new(vec![candle(100, 10.0, 20.0)]);
    let vp = viewport(&s, &cfg).expect("ready");

    assert!((vp.y_min - (10.0 - 0.5 - 2.0)).abs() < 1e-9);
    assert!((vp.y_max - (20.0 + 0.5 - 2.0)).abs() < 1e-9);
}

#[test]
fn extent_changes_when_the_window_slides() {
    let cfg = WindowConfig {
        max_visible: 2,
        ..WindowConfig::default()
    };
    let mut candles = vec![candle(100, 10.0, 12.0), candle(160, 11.0, 13.0)];
    let before = viewport(&CandleSeries::new(candles.clone()), &cfg).expect("ready");

    candles.push(candle(220, 50.0, 60.0));
    let after = viewport(&CandleSeries::new(candles), &cfg).expect("ready");

    assert_ne!(before, after);
    assert_eq!(after.start, 1);
    assert!((after.y_max - 60.5).abs() < 1e-9);
}
