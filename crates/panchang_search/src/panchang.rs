//! Result assembler: one panchang per civil date and location.

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use panchang_core::{Body, Direction, Ephemeris, Instant};
use panchang_vedic::{Locale, weekday_index};

use crate::config::ScanConfig;
use crate::error::PanchangError;
use crate::panchang_types::{PanchangRequest, PanchangResult};
use crate::riseset::find_rise_set;
use crate::scanner::scan;

/// 00:00 UTC of a civil date, the start of every rise/set search.
pub fn day_start_utc(date: NaiveDate) -> Instant {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Localized weekday name of a civil date.
pub fn vaara_for_date(date: NaiveDate, locale: Locale) -> &'static str {
    locale.weekday_name(weekday_index(date))
}

/// Compute the full panchang for `request`.
///
/// Sunrise, sunset, moonrise and moonset are each the first event within
/// `config.search_window_days` of 00:00 UTC on the requested date. If that
/// sunset precedes the sunrise (observers far west of Greenwich), sunset is
/// searched again from sunrise so the scan window is a daylight interval.
/// Any failure aborts the whole request.
pub fn panchang_for_date<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    request: &PanchangRequest,
    config: &ScanConfig,
) -> Result<PanchangResult, PanchangError> {
    let date = request.validate()?;
    config.validate()?;
    let observer = request.observer();
    let start = day_start_utc(date);
    let window = config.search_window_days;

    let sunrise = find_rise_set(ephemeris, Body::Sun, &observer, Direction::Rising, &start, window)?;
    let mut sunset =
        find_rise_set(ephemeris, Body::Sun, &observer, Direction::Setting, &start, window)?;
    if sunset < sunrise {
        debug!("sunset {sunset} precedes sunrise {sunrise}; searching again from sunrise");
        sunset =
            find_rise_set(ephemeris, Body::Sun, &observer, Direction::Setting, &sunrise, window)?;
    }
    let moonrise =
        find_rise_set(ephemeris, Body::Moon, &observer, Direction::Rising, &start, window)?;
    let moonset =
        find_rise_set(ephemeris, Body::Moon, &observer, Direction::Setting, &start, window)?;

    let segments = scan(ephemeris, &sunrise, &sunset, &observer, config)?;
    let vaara = vaara_for_date(date, config.locale).to_string();
    debug!(
        "panchang {date} at ({}, {}): {vaara}, sunrise {sunrise}, sunset {sunset}",
        observer.latitude, observer.longitude
    );

    Ok(PanchangResult {
        vaara,
        tithi: segments.tithi,
        nakshatra: segments.nakshatra,
        karana: segments.karana,
        yoga: segments.yoga,
        sunrise,
        sunset,
        moonrise,
        moonset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_start_is_midnight() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_start_utc(d).to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn vaara_names() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(vaara_for_date(d, Locale::English), "Monday");
        assert_eq!(vaara_for_date(d, Locale::Hindi), "सोमवार");
    }
}
