//! Panchang engine: sunrise-to-sunset segments of tithi, nakshatra, karana
//! and yoga, plus sun and moon rise/set and the weekday.
//!
//! The engine is generic over [`panchang_core::Ephemeris`]; it holds no
//! state between calls and performs no I/O.
//!
//! ```ignore
//! let eph = panchang_ephem::AnalyticEphemeris::new();
//! let req = PanchangRequest::new(2024, 1, 1, 17.385, 78.4867);
//! let day = panchang_for_date(&eph, &req, &ScanConfig::default())?;
//! ```

pub mod config;
pub mod error;
pub mod longitude;
pub mod panchang;
pub mod panchang_types;
pub mod riseset;
pub mod scanner;

pub use config::{MAX_STEP_SECONDS, ScanConfig};
pub use error::PanchangError;
pub use longitude::longitude_of;
pub use panchang::{day_start_utc, panchang_for_date, vaara_for_date};
pub use panchang_types::{
    CalendarSegment, PanchangRequest, PanchangResult, ScanResult, validate_observer,
};
pub use riseset::find_rise_set;
pub use scanner::{CycleIndices, sample_indices, scan};
