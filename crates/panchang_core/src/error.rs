//! Errors raised by ephemeris providers.

use panchang_time::TimeError;
use thiserror::Error;

/// Failure inside an ephemeris provider.
///
/// Retrying with identical inputs reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// An iterative search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// The instant lies outside the model's validity range.
    #[error("JD(TT) {jd_tt:.3} is outside the ephemeris validity range")]
    OutOfRange { jd_tt: f64 },
    /// Time conversion failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Provider-specific failure (external libraries, data files).
    #[error("ephemeris provider error: {0}")]
    Provider(String),
}
