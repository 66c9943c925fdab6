//! Horizon crossing search.
//!
//! Samples `h(t) - h0(t)` across the window at the configured coarse step,
//! takes the first sign change in the requested direction, and bisects it.
//! Altitude is geocentric: `sin h = sin φ sin δ + cos φ cos δ cos H`.

use chrono::Duration;
use log::trace;
use panchang_core::{
    Body, Crossing, Direction, EphemerisError, Instant, Observer, bisect_root, find_crossing,
};
use panchang_time::{SECONDS_PER_DAY, jd_utc, local_sidereal_time_deg};

use crate::riseset_types::{AU_KM, RiseSetConfig};
use crate::{AnalyticEphemeris, BodyState};

/// Bisection stops once the bracket is narrower than this, in seconds.
const TOLERANCE_SECONDS: f64 = 0.1;

/// Upper bound on bisection steps (10 min / 2^40 is far below tolerance).
const MAX_ITERATIONS: usize = 40;

/// Geocentric altitude in degrees of a body at `ra_deg`/`dec_deg`.
pub fn altitude_deg(ra_deg: f64, dec_deg: f64, latitude_deg: f64, lst_deg: f64) -> f64 {
    let hour_angle = (lst_deg - ra_deg).to_radians();
    let (sin_phi, cos_phi) = latitude_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let sin_h = sin_phi * sin_dec + cos_phi * cos_dec * hour_angle.cos();
    sin_h.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Altitude above the rise/set target altitude, in degrees.
fn altitude_margin(
    eph: &AnalyticEphemeris,
    body: Body,
    observer: &Observer,
    instant: &Instant,
    config: &RiseSetConfig,
) -> Result<f64, EphemerisError> {
    let state: BodyState = eph.body_state(body, instant)?;
    let lst = local_sidereal_time_deg(jd_utc(instant), observer.longitude);
    let h = altitude_deg(
        state.equatorial.ra_deg,
        state.equatorial.dec_deg,
        observer.latitude,
        lst,
    );
    let h0 = match body {
        Body::Sun => config.sun_target_altitude_deg(
            state.ecliptic.distance_km / AU_KM,
            observer.elevation_meters,
        ),
        Body::Moon => config.moon_target_altitude_deg(state.ecliptic.distance_km, observer.elevation_meters),
    };
    Ok(h - h0)
}

fn offset(start: &Instant, seconds: f64) -> Instant {
    *start + Duration::milliseconds((seconds * 1000.0).round() as i64)
}

/// First rise or set of `body` in `[start, start + window_days]`.
pub(crate) fn search(
    eph: &AnalyticEphemeris,
    body: Body,
    observer: &Observer,
    direction: Direction,
    start: &Instant,
    window_days: f64,
) -> Result<Option<Instant>, EphemerisError> {
    let config = eph.config();
    let crossing = match direction {
        Direction::Rising => Crossing::Ascending,
        Direction::Setting => Crossing::Descending,
    };
    let end = window_days * SECONDS_PER_DAY;
    let step = config.coarse_step_minutes * 60.0;

    let margin = |s: f64| altitude_margin(eph, body, observer, &offset(start, s), config);
    let Some((lo, hi)) = find_crossing(margin, 0.0, end, step, crossing)? else {
        trace!("no {body} {direction} within {window_days} days of {start}");
        return Ok(None);
    };
    let root = bisect_root(margin, lo, hi, TOLERANCE_SECONDS, MAX_ITERATIONS)?;
    let event = offset(start, root);
    trace!("{body} {direction} at {event}");
    Ok(Some(event))
}
