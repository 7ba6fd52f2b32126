//! Clock-style (`[D.]HH:MM:SS`) durations
//!
//! This is the format Service Bus exports use for every time-span property.
//! Parsing never fails: anything missing or unreadable counts as zero.

use super::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, to_iso_duration};

/// A clock-style duration split into its components
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockDuration {
    pub days: i64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl ClockDuration {
    /// Total length in milliseconds, rounded to the nearest millisecond.
    ///
    /// Saturates at the `i64` range instead of overflowing.
    pub fn to_millis(&self) -> i64 {
        let time_ms = self.hours * MILLIS_PER_HOUR as f64
            + self.minutes * MILLIS_PER_MINUTE as f64
            + self.seconds * 1000.0;
        let total = self.days as f64 * MILLIS_PER_DAY as f64 + time_ms;
        // `as` saturates for out-of-range floats
        total.round() as i64
    }
}

/// Parse a `[D.]HH:MM:SS` duration.
///
/// If the text contains a `.`, everything before the first `.` is the day
/// count and everything after it is the time portion. The time portion is
/// split on `:` into hours, minutes and seconds.
///
/// # Example
///
/// ```rust
/// use servicebus_emulator_config::duration::parse_clock_duration;
///
/// let parsed = parse_clock_duration("2.01:30:00");
/// assert_eq!(parsed.days, 2);
/// assert_eq!(parsed.hours, 1.0);
/// assert_eq!(parsed.minutes, 30.0);
/// ```
pub fn parse_clock_duration(text: &str) -> ClockDuration {
    let (days, time) = match text.split_once('.') {
        Some((days, time)) => (parse_leading_int(days), time),
        None => (0, text),
    };

    let mut parts = time.split(':').map(parse_component);

    ClockDuration {
        days,
        hours: parts.next().unwrap_or(0.0),
        minutes: parts.next().unwrap_or(0.0),
        seconds: parts.next().unwrap_or(0.0),
    }
}

/// Clamp `millis` into `[min_ms, max_ms]`.
///
/// Applies the upper bound first, then the lower one, so an inverted pair
/// (`min_ms > max_ms`) always yields `min_ms`.
pub fn clamp_millis(millis: i64, min_ms: i64, max_ms: i64) -> i64 {
    millis.min(max_ms).max(min_ms)
}

/// Parse a clock-style duration, clamp it and render it as ISO 8601.
///
/// # Example
///
/// ```rust
/// use servicebus_emulator_config::duration::normalize_duration;
///
/// assert_eq!(normalize_duration("00:10:00", 300_000, 60_000), "PT5M");
/// assert_eq!(normalize_duration("00:00:30", 3_600_000, 1_000), "PT30S");
/// ```
pub fn normalize_duration(clock_text: &str, max_ms: i64, min_ms: i64) -> String {
    let millis = parse_clock_duration(clock_text).to_millis();
    to_iso_duration(clamp_millis(millis, min_ms, max_ms))
}

/// Leading base-10 integer, e.g. `"12abc"` -> 12; 0 when there are no digits
pub(crate) fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));

    if negative { -value } else { value }
}

fn parse_component(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    // f64::from_str accepts "inf" and "NaN"; only plain decimals count here
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return 0.0;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_days() {
        let parsed = parse_clock_duration("01:02:03");
        assert_eq!(
            parsed,
            ClockDuration {
                days: 0,
                hours: 1.0,
                minutes: 2.0,
                seconds: 3.0
            }
        );
    }

    #[test]
    fn test_parse_with_days() {
        let parsed = parse_clock_duration("14.00:00:00");
        assert_eq!(parsed.days, 14);
        assert_eq!(parsed.to_millis(), 14 * MILLIS_PER_DAY);
    }

    #[test]
    fn test_parse_degrades_to_zero() {
        assert_eq!(parse_clock_duration(""), ClockDuration::default());
        assert_eq!(parse_clock_duration("garbage"), ClockDuration::default());
        assert_eq!(parse_clock_duration("aa:bb:cc"), ClockDuration::default());

        let partial = parse_clock_duration("05");
        assert_eq!(partial.hours, 5.0);
        assert_eq!(partial.minutes, 0.0);
        assert_eq!(partial.seconds, 0.0);
    }

    #[test]
    fn test_parse_rejects_special_floats() {
        assert_eq!(parse_clock_duration("inf:NaN:infinity"), ClockDuration::default());
    }

    #[test]
    fn test_day_prefix_takes_first_dot() {
        // Fractional seconds only survive when a day prefix is present
        let parsed = parse_clock_duration("1.00:00:01.5");
        assert_eq!(parsed.days, 1);
        assert_eq!(parsed.seconds, 1.5);

        let parsed = parse_clock_duration("00:00:30.5");
        assert_eq!(parsed.days, 0);
        assert_eq!(parsed.hours, 5.0);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("  7days"), 7);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_millis(500, 1_000, 5_000), 1_000);
        assert_eq!(clamp_millis(9_000, 1_000, 5_000), 5_000);
        assert_eq!(clamp_millis(3_000, 1_000, 5_000), 3_000);
    }

    #[test]
    fn test_clamp_inverted_bounds_collapse_to_min() {
        assert_eq!(clamp_millis(0, 10_000, 1_000), 10_000);
        assert_eq!(clamp_millis(50_000, 10_000, 1_000), 10_000);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_duration("00:10:00", 300_000, 60_000), "PT5M");
        assert_eq!(normalize_duration("00:00:30", 3_600_000, 1_000), "PT30S");
        assert_eq!(normalize_duration("00:00:00", 3_600_000, 1_000), "PT1S");
        assert_eq!(
            normalize_duration("10675199.02:48:05.4775807", 3_600_000, 1_000),
            "PT1H"
        );
    }
}
