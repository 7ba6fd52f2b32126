//! Duration command handlers

use crate::cli::error::CliError;
use crate::duration::{MILLIS_PER_HOUR, MILLIS_PER_SECOND, normalize_duration, parse_iso_duration};

/// Default upper bound for `duration` (1 hour)
pub const DEFAULT_MAX_MS: i64 = MILLIS_PER_HOUR;

/// Default lower bound for `duration` (1 second)
pub const DEFAULT_MIN_MS: i64 = MILLIS_PER_SECOND;

/// Arguments for the duration command
#[derive(Debug, Clone)]
pub struct DurationArgs {
    /// Clock-style value, `[D.]HH:MM:SS`
    pub value: String,
    pub max_ms: i64,
    pub min_ms: i64,
}

impl DurationArgs {
    /// Arguments with the default 1 second to 1 hour bounds
    pub fn with_defaults(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            max_ms: DEFAULT_MAX_MS,
            min_ms: DEFAULT_MIN_MS,
        }
    }
}

/// Normalize the value into clamped ISO 8601 text
pub fn run_duration(args: &DurationArgs) -> String {
    normalize_duration(&args.value, args.max_ms, args.min_ms)
}

/// Handle the duration command: print the clamped ISO 8601 value
pub fn handle_duration(args: &DurationArgs) -> Result<(), CliError> {
    println!("{}", run_duration(args));
    Ok(())
}

/// Handle the iso-millis command: print the millisecond value of an ISO 8601 duration
pub fn handle_iso_millis(value: &str) -> Result<(), CliError> {
    println!("{}", parse_iso_duration(value)?);
    Ok(())
}
