//! Rise/set finder: a horizon crossing or a typed failure.

use log::{debug, warn};
use panchang_core::{Body, Direction, Ephemeris, Instant, Observer};

use crate::error::PanchangError;

/// Next `direction` crossing of `body` within `window_days` of
/// `search_start`.
///
/// A missing event is an error, never a default time.
pub fn find_rise_set<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    observer: &Observer,
    direction: Direction,
    search_start: &Instant,
    window_days: f64,
) -> Result<Instant, PanchangError> {
    match ephemeris.search_rise_set(body, observer, direction, search_start, window_days)? {
        Some(event) => {
            debug!("{body} {direction}: {event}");
            Ok(event)
        }
        None => {
            warn!(
                "no {body} {direction} at lat {} lon {} within {window_days} days of {search_start}",
                observer.latitude, observer.longitude
            );
            Err(PanchangError::NoRiseSetEvent {
                body,
                direction,
                date: search_start.date_naive(),
            })
        }
    }
}
