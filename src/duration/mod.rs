//! Duration codec
//!
//! Converts between the two textual duration encodings found in Service Bus
//! exports and the emulator configuration:
//! - ISO 8601 style (`P[nD][T[nH][nM][n[.n]S]]`), parsed strictly
//! - Clock style (`[D.]HH:MM:SS`), parsed leniently
//!
//! Both map onto a millisecond count. The canonical output is always the
//! ISO 8601 style produced by [`to_iso_duration`].
//!
//! The mapper only ever feeds clock-style values through [`normalize_duration`].
//! The strict ISO parser is part of the public surface but is not on that path;
//! merging the two parsers is left for when exports start carrying ISO values.

pub mod clock;
pub mod iso;

pub use clock::{ClockDuration, clamp_millis, normalize_duration, parse_clock_duration};
pub use iso::{parse_iso_duration, to_iso_duration};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Error raised by the strict ISO 8601 parser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("Invalid ISO 8601 duration format: {0}")]
    InvalidFormat(String),
    #[error("Duration out of range: {0}")]
    OutOfRange(String),
}
