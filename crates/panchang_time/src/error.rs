//! Error types for calendar and time-scale conversions.

use thiserror::Error;

/// Errors from calendar validation and instant conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple is not a valid Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// A Julian Date cannot be represented as a UTC instant.
    #[error("Julian Date {0} is outside the representable UTC range")]
    OutOfRange(f64),
}
