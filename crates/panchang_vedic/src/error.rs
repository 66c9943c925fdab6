//! Error types for Vedic cycle lookups.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A locale tag that no name table exists for.
    #[error("unknown locale: {0:?} (expected \"english\" or \"hindi\")")]
    UnknownLocale(String),
}
