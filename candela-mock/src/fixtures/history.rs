use candela_types::{RawSample, Timeframe};

// One mock trading session starting 2024-01-02 00:00:00 UTC.
const SESSION_START: i64 = 1_704_153_600;

// Sixteen buckets of a gently trending walk, one more than the default
// visible window, so windowed consumers always have something to clip.
const ROWS: &[(&str, &str, &str, &str)] = &[
    ("42000.0", "42180.5", "41950.0", "42120.0"),
    ("42120.0", "42250.0", "42080.5", "42200.0"),
    ("42200.0", "42310.0", "42140.0", "42160.5"),
    ("42160.5", "42220.0", "42050.0", "42090.0"),
    ("42090.0", "42130.5", "41980.0", "42020.0"),
    ("42020.0", "42160.0", "41990.5", "42140.0"),
    ("42140.0", "42290.0", "42100.0", "42260.5"),
    ("42260.5", "42400.0", "42210.0", "42380.0"),
    ("42380.0", "42450.5", "42300.0", "42330.0"),
    ("42330.0", "42390.0", "42240.5", "42280.0"),
    ("42280.0", "42350.0", "42200.0", "42310.5"),
    ("42310.5", "42480.0", "42290.0", "42460.0"),
    ("42460.0", "42520.5", "42380.0", "42410.0"),
    ("42410.0", "42470.0", "42330.5", "42360.0"),
    ("42360.0", "42430.0", "42280.0", "42400.5"),
    ("42400.5", "42560.0", "42370.0", "42540.0"),
];

/// Deterministic raw history for `timeframe`: the same price path laid out on
/// that timeframe's bucket width.
pub fn by_timeframe(timeframe: Timeframe) -> Vec<RawSample> {
    let step = timeframe.seconds() as i64;
    ROWS.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            RawSample::new(
                (SESSION_START + i as i64 * step).to_string(),
                open,
                high,
                low,
                close,
            )
        })
        .collect()
}
