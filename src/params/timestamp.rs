//! Timestamp conversion for save dates

use chrono::{DateTime, TimeZone};

use crate::error::{Error, Result};

const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Convert a timestamp to milliseconds since the Unix epoch.
///
/// The exact offset is rounded to the nearest millisecond, ties to even.
/// Pre-epoch timestamps produce negative values.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `d` is `None`.
pub fn datetime_to_epoch_millis<Tz: TimeZone>(d: Option<&DateTime<Tz>>) -> Result<i64> {
    let d = d.ok_or_else(|| Error::invalid_argument("d cannot be a value that evaluates to false"))?;
    // timestamp() floors to the second; the sub-second part is always positive
    let nanos = i128::from(d.timestamp()) * NANOS_PER_SEC + i128::from(d.timestamp_subsec_nanos());
    let millis = round_half_even(nanos, NANOS_PER_MILLI);
    i64::try_from(millis)
        .map_err(|_| Error::invalid_argument(format!("timestamp out of range: {millis} ms")))
}

fn round_half_even(value: i128, divisor: i128) -> i128 {
    let quotient = value.div_euclid(divisor);
    let twice_remainder = value.rem_euclid(divisor) * 2;
    if twice_remainder > divisor || (twice_remainder == divisor && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}
