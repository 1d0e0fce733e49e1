use candela_core::sanitize;
use candela_types::{RawSample, SanitizeConfig, YearRange};
use chrono::Datelike;

fn sample(bucket: &str, open: &str, high: &str, low: &str, close: &str) -> RawSample {
    RawSample::new(bucket, open, high, low, close)
}

/// A well-formed sample with all prices set to `price`.
fn flat(bucket: &str, price: &str) -> RawSample {
    sample(bucket, price, price, price, price)
}

#[test]
fn non_numeric_price_is_excluded_not_coerced() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(
        &[
            flat("1700000000", "100.0"),
            sample("1700000060", "abc", "2", "1", "1.5"),
            sample("1700000120", "1", "NaN", "0.5", "0.9"),
        ],
        &cfg,
    );

    assert_eq!(out.len(), 1);
    assert!((out.get(0).unwrap().open - 100.0).abs() < f64::EPSILON);
}

#[test]
fn non_numeric_bucket_is_excluded() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(&[flat("not-a-timestamp", "10"), flat("", "10")], &cfg);
    assert!(out.is_empty());
}

#[test]
fn implausible_years_are_excluded() {
    let cfg = SanitizeConfig::default();
    // 1999-12-31 and 2051-01-01 fall outside the default 2000-2050 range.
    let out = sanitize(
        &[
            flat("946684799", "10"),
            flat("946684800", "10"),
            flat("2556144000", "10"),
        ],
        &cfg,
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out.get(0).unwrap().ts.year(), 2000);
}

#[test]
fn year_range_is_configurable() {
    let cfg = SanitizeConfig {
        plausible_years: YearRange {
            min: 1990,
            max: 1999,
        },
        ..SanitizeConfig::default()
    };
    // 1995-06-15-ish.
    let out = sanitize(&[flat("803174400", "10"), flat("1700000000", "10")], &cfg);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get(0).unwrap().ts.year(), 1995);
}

#[test]
fn out_of_range_prices_are_excluded() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(
        &[
            sample("1700000000", "-1", "2", "0.5", "1.5"),
            sample("1700000060", "1", "2", "0", "1.5"),
            sample("1700000120", "1", "100001", "0.5", "1.5"),
            sample("1700000180", "1", "2", "0.5", "1.5"),
        ],
        &cfg,
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out.get(0).unwrap().ts.timestamp(), 1_700_000_180);
}

#[test]
fn price_at_ceiling_is_kept() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(&[flat("1700000000", "100000")], &cfg);
    assert_eq!(out.len(), 1);
}

#[test]
fn infinite_price_is_excluded() {
    let cfg = SanitizeConfig::default();
    // "1e999" overflows f64 to infinity; non-finite values never pass.
    let out = sanitize(&[sample("1700000000", "1", "1e999", "0.5", "1.5")], &cfg);
    assert!(out.is_empty());
}

#[test]
fn unsorted_input_comes_out_ascending() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(
        &[
            flat("1700000120", "3"),
            flat("1700000000", "1"),
            flat("1700000060", "2"),
        ],
        &cfg,
    );

    let ts: Vec<i64> = out.iter().map(|c| c.ts.timestamp()).collect();
    assert_eq!(ts, vec![1_700_000_000, 1_700_000_060, 1_700_000_120]);
}

#[test]
fn duplicate_buckets_keep_arrival_order() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(
        &[
            flat("1700000060", "2.0"),
            flat("1700000000", "1.0"),
            flat("1700000060", "3.0"),
        ],
        &cfg,
    );

    assert_eq!(out.len(), 3);
    // The two 1700000060 entries keep the order they arrived in.
    assert!((out.get(1).unwrap().open - 2.0).abs() < f64::EPSILON);
    assert!((out.get(2).unwrap().open - 3.0).abs() < f64::EPSILON);
}

#[test]
fn empty_and_fully_rejected_input_yield_empty_series() {
    let cfg = SanitizeConfig::default();
    assert!(sanitize(&[], &cfg).is_empty());
    assert!(sanitize(&[flat("garbage", "nope")], &cfg).is_empty());
}

#[test]
fn mixed_batch_keeps_only_the_valid_row() {
    let cfg = SanitizeConfig::default();
    let out = sanitize(
        &[
            sample("100", "1", "2", "0.5", "1.5"),
            sample("50", "-1", "2", "0.5", "1.5"),
        ],
        &cfg,
    );

    // Both fall outside the plausible year range with the default config;
    // widen it to mirror the upstream fixture exactly.
    assert!(out.is_empty());

    let cfg = SanitizeConfig {
        plausible_years: YearRange {
            min: 1970,
            max: 2050,
        },
        ..SanitizeConfig::default()
    };
    let out = sanitize(
        &[
            sample("100", "1", "2", "0.5", "1.5"),
            sample("50", "-1", "2", "0.5", "1.5"),
        ],
        &cfg,
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out.get(0).unwrap().ts.timestamp(), 100);
}
