//! Vedic calendar cycles for the panchang.
//!
//! This crate provides:
//! - Index formulas for tithi, nakshatra, yoga and karana from Sun and Moon
//!   longitudes
//! - Paksha classification of a tithi
//! - Weekday (vaara) of a civil date
//! - Localized name tables ([`Locale`])
//!
//! Everything here is pure arithmetic and table lookup.

pub mod error;
pub mod karana;
pub mod locale;
pub mod nakshatra;
pub mod tithi;
pub mod vaara;
pub mod yoga;

pub use error::VedicError;
pub use karana::{KARANA_CYCLE, karana_index};
pub use locale::{CycleKind, Locale};
pub use nakshatra::{NAKSHATRA_COUNT, NAKSHATRA_SPAN_27, nakshatra_index};
pub use tithi::{
    Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, paksha_for_tithi, tithi_in_paksha, tithi_index,
};
pub use vaara::weekday_index;
pub use yoga::{YOGA_COUNT, yoga_index};
