//! Request and result types of a panchang computation.

use chrono::NaiveDate;
use panchang_core::{Instant, Observer};
use panchang_vedic::Paksha;
use serde::{Deserialize, Serialize};

use crate::error::PanchangError;

/// One contiguous interval during which a cycle index is constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSegment {
    /// 1-based cycle number (index + 1).
    pub id: u8,
    /// Localized name of the cycle element.
    pub name: String,
    /// Start of the interval (inclusive).
    pub start: Instant,
    /// End of the interval; equals the next segment's start.
    pub end: Instant,
    /// Fortnight, tithi segments only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paksha: Option<Paksha>,
}

impl CalendarSegment {
    /// 0-based cycle index.
    pub fn index(&self) -> u8 {
        self.id.saturating_sub(1)
    }
}

/// Segment lists of one sunrise-to-sunset scan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub tithi: Vec<CalendarSegment>,
    pub nakshatra: Vec<CalendarSegment>,
    pub karana: Vec<CalendarSegment>,
    pub yoga: Vec<CalendarSegment>,
}

/// Full panchang for one date and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangResult {
    /// Localized weekday name of the requested civil date.
    pub vaara: String,
    pub tithi: Vec<CalendarSegment>,
    pub nakshatra: Vec<CalendarSegment>,
    pub karana: Vec<CalendarSegment>,
    pub yoga: Vec<CalendarSegment>,
    pub sunrise: Instant,
    pub sunset: Instant,
    pub moonrise: Instant,
    pub moonset: Instant,
}

/// Reject observers with non-finite fields or coordinates outside
/// latitude [-90, 90] and longitude [-180, 180].
pub fn validate_observer(observer: &Observer) -> Result<(), PanchangError> {
    if !observer.latitude.is_finite() || !(-90.0..=90.0).contains(&observer.latitude) {
        return Err(PanchangError::InvalidInput(format!(
            "latitude must be within [-90, 90], got {}",
            observer.latitude
        )));
    }
    if !observer.longitude.is_finite() || !(-180.0..=180.0).contains(&observer.longitude) {
        return Err(PanchangError::InvalidInput(format!(
            "longitude must be within [-180, 180], got {}",
            observer.longitude
        )));
    }
    if !observer.elevation_meters.is_finite() {
        return Err(PanchangError::InvalidInput(format!(
            "elevation must be finite, got {}",
            observer.elevation_meters
        )));
    }
    Ok(())
}

/// Incoming request: a Gregorian civil date and an observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangRequest {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// Day of month, 1..=31.
    pub date: u32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation_meters: f64,
}

impl PanchangRequest {
    pub fn new(year: i32, month: u32, date: u32, latitude: f64, longitude: f64) -> Self {
        Self {
            year,
            month,
            date,
            latitude,
            longitude,
            elevation_meters: 0.0,
        }
    }

    /// Check the request and return its civil date.
    pub fn validate(&self) -> Result<NaiveDate, PanchangError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.date).ok_or_else(|| {
            PanchangError::InvalidInput(format!(
                "not a calendar date: {}-{:02}-{:02}",
                self.year, self.month, self.date
            ))
        })?;
        validate_observer(&self.observer())?;
        Ok(date)
    }

    pub fn observer(&self) -> Observer {
        Observer::new(self.latitude, self.longitude, self.elevation_meters)
    }
}
