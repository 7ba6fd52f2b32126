//! ISO 8601 duration parsing and canonical formatting

use super::{DurationError, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};
use once_cell::sync::Lazy;
use regex::Regex;

// Days, then an optional time part with hours, minutes and (fractional) seconds
static RE_ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$")
        .expect("Invalid regex")
});

/// Parse an ISO 8601 duration into milliseconds.
///
/// Only the day/hour/minute/second subset is accepted, in that order. Absent
/// components count as zero, so `"P"` and `"PT"` are both zero.
///
/// # Example
///
/// ```rust
/// use servicebus_emulator_config::duration::parse_iso_duration;
///
/// assert_eq!(parse_iso_duration("PT1M30S").unwrap(), 90_000);
/// assert!(parse_iso_duration("5 minutes").is_err());
/// ```
pub fn parse_iso_duration(text: &str) -> Result<i64, DurationError> {
    let caps = RE_ISO_DURATION
        .captures(text)
        .ok_or_else(|| DurationError::InvalidFormat(text.to_string()))?;

    let out_of_range = || DurationError::OutOfRange(text.to_string());
    let whole = |idx: usize| -> Result<i64, DurationError> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| out_of_range()),
            None => Ok(0),
        }
    };

    let days = whole(1)?;
    let hours = whole(2)?;
    let minutes = whole(3)?;
    let seconds = match caps.get(4) {
        Some(m) => m.as_str().parse::<f64>().map_err(|_| out_of_range())?,
        None => 0.0,
    };

    let seconds_ms = (seconds * 1000.0).round();
    if !seconds_ms.is_finite() || seconds_ms > i64::MAX as f64 {
        return Err(out_of_range());
    }

    days.checked_mul(MILLIS_PER_DAY)
        .and_then(|total| total.checked_add(hours.checked_mul(MILLIS_PER_HOUR)?))
        .and_then(|total| total.checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds_ms as i64))
        .ok_or_else(out_of_range)
}

/// Render milliseconds as a canonical ISO 8601 duration.
///
/// Sub-second precision is truncated. Zero components are omitted, and the
/// `T` designator only appears when hours, minutes or seconds are non-zero.
/// A zero (or negative) duration renders as the bare `"P"`.
pub fn to_iso_duration(millis: i64) -> String {
    let total_seconds = millis.max(0) / 1000;

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut iso = String::from("P");
    if days > 0 {
        iso.push_str(&format!("{}D", days));
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        iso.push('T');
        if hours > 0 {
            iso.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            iso.push_str(&format!("{}M", minutes));
        }
        if seconds > 0 {
            iso.push_str(&format!("{}S", seconds));
        }
    }

    iso
}
