//! Error taxonomy of a panchang request.

use chrono::NaiveDate;
use panchang_core::{Body, Direction, EphemerisError};
use thiserror::Error;

/// Errors returned by the panchang engine. None of them carry a partial
/// result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// Request or configuration rejected before any ephemeris call.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The body never crosses the horizon in the search window
    /// (polar day or night).
    #[error("no {direction} of the {body} within the search window starting {date}")]
    NoRiseSetEvent {
        body: Body,
        direction: Direction,
        date: NaiveDate,
    },
    /// Failure inside the ephemeris provider, passed through unchanged.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
