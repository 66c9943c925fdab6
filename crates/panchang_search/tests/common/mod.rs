//! Deterministic ephemeris doubles for engine tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, NaiveTime, TimeZone, Utc};
use panchang_core::{
    Body, Direction, Ephemeris, EphemerisError, EquatorialPosition, Instant, Observer,
};

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Instant {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Linear longitudes plus rise/set events at fixed UTC times of day.
#[derive(Debug, Clone)]
pub struct LinearEphemeris {
    pub epoch: Instant,
    pub sun_start_deg: f64,
    pub sun_deg_per_day: f64,
    pub moon_start_deg: f64,
    pub moon_deg_per_day: f64,
    pub sunrise: Option<Duration>,
    pub sunset: Option<Duration>,
    pub moonrise: Option<Duration>,
    pub moonset: Option<Duration>,
}

impl LinearEphemeris {
    /// Sun at 280°, Moon 60° ahead of it, rising 06:00 and setting 18:00 UTC.
    pub fn typical(epoch: Instant) -> Self {
        Self {
            epoch,
            sun_start_deg: 280.0,
            sun_deg_per_day: 0.9856,
            moon_start_deg: 340.0,
            moon_deg_per_day: 13.176,
            sunrise: Some(Duration::hours(6)),
            sunset: Some(Duration::hours(18)),
            moonrise: Some(Duration::hours(10)),
            moonset: Some(Duration::hours(22)),
        }
    }

    fn longitude_deg(&self, body: Body, instant: &Instant) -> f64 {
        let days = (*instant - self.epoch).num_milliseconds() as f64 / 86_400_000.0;
        let deg = match body {
            Body::Sun => self.sun_start_deg + self.sun_deg_per_day * days,
            Body::Moon => self.moon_start_deg + self.moon_deg_per_day * days,
        };
        deg.rem_euclid(360.0)
    }
}

/// First `day + time_of_day` at or after `start`, within `window_days`.
fn next_daily(time_of_day: Duration, start: &Instant, window_days: f64) -> Option<Instant> {
    let day0 = start.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = *start + Duration::milliseconds((window_days * 86_400_000.0) as i64);
    (0..=2)
        .map(|n| day0 + time_of_day + Duration::days(n))
        .find(|t| t >= start && *t <= end)
}

impl Ephemeris for LinearEphemeris {
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        _observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        Ok(EquatorialPosition {
            right_ascension_hours: self.longitude_deg(body, instant) / 15.0,
            declination_deg: 0.0,
        })
    }

    fn search_rise_set(
        &self,
        body: Body,
        _observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        let time_of_day = match (body, direction) {
            (Body::Sun, Direction::Rising) => self.sunrise,
            (Body::Sun, Direction::Setting) => self.sunset,
            (Body::Moon, Direction::Rising) => self.moonrise,
            (Body::Moon, Direction::Setting) => self.moonset,
        };
        Ok(time_of_day.and_then(|t| next_daily(t, search_start, window_days)))
    }
}

/// Provider that fails every call.
pub struct FailingEphemeris;

impl Ephemeris for FailingEphemeris {
    fn apparent_equatorial_position(
        &self,
        _body: Body,
        _instant: &Instant,
        _observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        Err(EphemerisError::Provider("position service down".into()))
    }

    fn search_rise_set(
        &self,
        _body: Body,
        _observer: &Observer,
        _direction: Direction,
        _search_start: &Instant,
        _window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        Err(EphemerisError::Provider("rise/set service down".into()))
    }
}

/// Wraps a provider and counts every call made through it.
pub struct CountingEphemeris<E> {
    pub inner: E,
    pub calls: AtomicUsize,
}

impl<E> CountingEphemeris<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<E: Ephemeris> Ephemeris for CountingEphemeris<E> {
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.apparent_equatorial_position(body, instant, observer)
    }

    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner
            .search_rise_set(body, observer, direction, search_start, window_days)
    }
}

/// Linear rise/set events, but the Moon's right ascension is NaN.
pub struct NonFiniteMoon(pub LinearEphemeris);

impl Ephemeris for NonFiniteMoon {
    fn apparent_equatorial_position(
        &self,
        body: Body,
        instant: &Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        let position = self.0.apparent_equatorial_position(body, instant, observer)?;
        Ok(match body {
            Body::Sun => position,
            Body::Moon => EquatorialPosition {
                right_ascension_hours: f64::NAN,
                ..position
            },
        })
    }

    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        search_start: &Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        self.0
            .search_rise_set(body, observer, direction, search_start, window_days)
    }
}
