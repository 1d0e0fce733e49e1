use candela_types::{Candle, CandleSeries, RawSample, SanitizeConfig};
use chrono::{DateTime, Datelike, Utc};

/// Why a raw sample was excluded from the sanitized series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// `bucket` did not parse as whole seconds since the epoch.
    MalformedBucket,
    /// At least one price field did not parse to a finite number.
    MalformedPrice,
    /// The bucket timestamp's calendar year is outside the plausible range.
    ImplausibleYear,
    /// At least one price is non-positive or above the configured ceiling.
    PriceOutOfRange,
}

fn parse_price(field: &str) -> Result<f64, RejectReason> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| RejectReason::MalformedPrice)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RejectReason::MalformedPrice)
    }
}

fn convert(sample: &RawSample, cfg: &SanitizeConfig) -> Result<Candle, RejectReason> {
    let secs: i64 = sample
        .bucket
        .trim()
        .parse()
        .map_err(|_| RejectReason::MalformedBucket)?;
    let ts = DateTime::<Utc>::from_timestamp(secs, 0).ok_or(RejectReason::MalformedBucket)?;

    let open = parse_price(&sample.open)?;
    let high = parse_price(&sample.high)?;
    let low = parse_price(&sample.low)?;
    let close = parse_price(&sample.close)?;

    if !cfg.plausible_years.contains(ts.year()) {
        return Err(RejectReason::ImplausibleYear);
    }
    for price in [open, high, low, close] {
        if price <= 0.0 || price > cfg.price_ceiling {
            return Err(RejectReason::PriceOutOfRange);
        }
    }

    Ok(Candle {
        ts,
        open,
        high,
        low,
        close,
    })
}

/// Convert raw backend records into an ordered, validated candle series.
///
/// Policy, not correction: a record either parses and passes every bound, or
/// it is dropped and logged. Survivors are stable-sorted ascending by bucket
/// timestamp, so duplicate buckets keep their relative arrival order. Never
/// fails: empty or fully rejected input yields the empty series, which
/// downstream treats as "no data yet".
#[must_use]
pub fn sanitize(samples: &[RawSample], cfg: &SanitizeConfig) -> CandleSeries {
    let mut candles = Vec::with_capacity(samples.len());
    for sample in samples {
        match convert(sample, cfg) {
            Ok(candle) => candles.push(candle),
            Err(reason) => {
                tracing::debug!(bucket = %sample.bucket, ?reason, "dropping raw sample");
            }
        }
    }
    CandleSeries::new(candles)
}
