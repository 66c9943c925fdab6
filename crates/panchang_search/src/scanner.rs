//! Segment scanner: samples Sun and Moon between sunrise and sunset and
//! cuts the four cycle index series into contiguous segments.

use chrono::Duration;
use log::{debug, trace};
use panchang_core::{Body, Ephemeris, EphemerisError, Instant, Observer, bisect_transition};
use panchang_vedic::{
    CycleKind, Locale, karana_index, nakshatra_index, paksha_for_tithi, tithi_index, yoga_index,
};

use crate::config::ScanConfig;
use crate::error::PanchangError;
use crate::longitude::longitude_of;
use crate::panchang_types::{CalendarSegment, ScanResult};

/// Upper bound on bisection steps when refining a boundary.
const MAX_REFINE_ITERATIONS: usize = 64;

/// Upper bound on index changes resolved between two consecutive samples.
const MAX_CHANGES_PER_STEP: usize = 64;

/// Cycle indices at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleIndices {
    /// 0..=29
    pub tithi: u8,
    /// 0..=26
    pub nakshatra: u8,
    /// 0..=10
    pub karana: u8,
    /// 0..=26
    pub yoga: u8,
}

impl CycleIndices {
    /// Indices derived from Sun and Moon longitudes in degrees.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> Self {
        let tithi = tithi_index(sun_deg, moon_deg);
        Self {
            tithi,
            nakshatra: nakshatra_index(moon_deg),
            karana: karana_index(tithi),
            yoga: yoga_index(sun_deg, moon_deg),
        }
    }

    pub fn get(&self, kind: CycleKind) -> u8 {
        match kind {
            CycleKind::Tithi => self.tithi,
            CycleKind::Nakshatra => self.nakshatra,
            CycleKind::Karana => self.karana,
            CycleKind::Yoga => self.yoga,
        }
    }
}

/// Sample both longitudes at `instant` and derive the cycle indices.
pub fn sample_indices<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    instant: &Instant,
    observer: &Observer,
) -> Result<CycleIndices, EphemerisError> {
    let sun = longitude_of(ephemeris, Body::Sun, instant, observer)?;
    let moon = longitude_of(ephemeris, Body::Moon, instant, observer)?;
    Ok(CycleIndices::from_longitudes(sun, moon))
}

/// Open segment plus the segments already closed for one cycle.
struct SegmentTracker {
    kind: CycleKind,
    open: Option<(u8, Instant)>,
    segments: Vec<CalendarSegment>,
}

impl SegmentTracker {
    fn new(kind: CycleKind) -> Self {
        Self {
            kind,
            open: None,
            segments: Vec::new(),
        }
    }

    fn close(&mut self, end: Instant, locale: Locale) {
        let Some((index, start)) = self.open.take() else {
            return;
        };
        trace!("{:?} {} closes at {end}", self.kind, index + 1);
        self.segments.push(CalendarSegment {
            id: index + 1,
            name: locale.name(self.kind, index).to_string(),
            start,
            end,
            paksha: (self.kind == CycleKind::Tithi).then(|| paksha_for_tithi(index)),
        });
    }

    /// Close the open segment at sunset. A segment opened exactly at sunset
    /// after an earlier one is dropped rather than emitted with zero length.
    fn finish(mut self, sunset: Instant, locale: Locale) -> Vec<CalendarSegment> {
        match self.open {
            Some((_, start)) if start == sunset && !self.segments.is_empty() => {
                self.open = None;
            }
            _ => self.close(sunset, locale),
        }
        self.segments
    }
}

/// First instant in `(before, after]` at which `kind` leaves `old`.
fn refine_boundary<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    kind: CycleKind,
    old: u8,
    before: Instant,
    after: Instant,
    tolerance_seconds: f64,
) -> Result<Instant, EphemerisError> {
    let at = |seconds: f64| before + Duration::milliseconds((seconds * 1000.0).round() as i64);
    let span = (after - before).num_milliseconds() as f64 / 1000.0;
    let inside = |s: f64| -> Result<bool, EphemerisError> {
        Ok(sample_indices(ephemeris, &at(s), observer)?.get(kind) == old)
    };
    let offset = bisect_transition(inside, 0.0, span, tolerance_seconds, MAX_REFINE_ITERATIONS)?;
    Ok(at(offset))
}

/// Every index change of `kind` in `(before, after]`, as `(boundary, new index)`
/// pairs in time order. Walks crossing by crossing from `old` until the index
/// seen at `after` is reached, so a step spanning several changes keeps each
/// intermediate segment.
#[allow(clippy::too_many_arguments)]
fn refine_changes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    kind: CycleKind,
    old: u8,
    new: u8,
    before: Instant,
    after: Instant,
    tolerance_seconds: f64,
) -> Result<Vec<(Instant, u8)>, EphemerisError> {
    let mut changes = Vec::new();
    let mut current = old;
    let mut lower = before;
    while current != new && changes.len() < MAX_CHANGES_PER_STEP {
        let boundary = refine_boundary(
            ephemeris,
            observer,
            kind,
            current,
            lower,
            after,
            tolerance_seconds,
        )?;
        let next = if boundary >= after {
            new
        } else {
            sample_indices(ephemeris, &boundary, observer)?.get(kind)
        };
        changes.push((boundary, next));
        current = next;
        lower = boundary;
    }
    if current != new {
        changes.push((after, new));
    }
    Ok(changes)
}

/// Scan `[sunrise, sunset]` and return the four segment lists.
///
/// Samples at `sunrise + k * step` while the sample is not past sunset.
/// Every index change closes the open segment and opens the next at the
/// sample instant. With [`ScanConfig::refine_boundaries`] set, each crossing
/// between two samples is bisected instead, and a step spanning several
/// changes yields one segment per intermediate index.
///
/// All lists end at `sunset`. When an index changes exactly at a sample equal
/// to `sunset`, the zero-length segment it would open is not emitted; the
/// preceding segment already ends at `sunset`.
pub fn scan<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    sunrise: &Instant,
    sunset: &Instant,
    observer: &Observer,
    config: &ScanConfig,
) -> Result<ScanResult, PanchangError> {
    config.validate()?;
    if sunset < sunrise {
        return Err(PanchangError::InvalidInput(format!(
            "sunset {sunset} precedes sunrise {sunrise}"
        )));
    }

    let locale = config.locale;
    let mut trackers = [
        SegmentTracker::new(CycleKind::Tithi),
        SegmentTracker::new(CycleKind::Nakshatra),
        SegmentTracker::new(CycleKind::Karana),
        SegmentTracker::new(CycleKind::Yoga),
    ];

    let step = config.step();
    let mut previous: Option<Instant> = None;
    let mut samples = 0_usize;
    let mut t = *sunrise;
    while t <= *sunset {
        let indices = sample_indices(ephemeris, &t, observer)?;
        samples += 1;

        for tracker in &mut trackers {
            let index = indices.get(tracker.kind);
            match tracker.open {
                None => tracker.open = Some((index, t)),
                Some((old, _)) if old != index => {
                    let changes = match previous {
                        Some(before) if config.refine_boundaries => refine_changes(
                            ephemeris,
                            observer,
                            tracker.kind,
                            old,
                            index,
                            before,
                            t,
                            config.refine_tolerance_seconds,
                        )?,
                        _ => vec![(t, index)],
                    };
                    for (boundary, next) in changes {
                        tracker.close(boundary, locale);
                        tracker.open = Some((next, boundary));
                    }
                }
                Some(_) => {}
            }
        }

        previous = Some(t);
        // Past the representable range is past sunset too.
        let Some(next) = t.checked_add_signed(step) else {
            break;
        };
        t = next;
    }

    let [tithi, nakshatra, karana, yoga] = trackers.map(|t| t.finish(*sunset, locale));
    debug!(
        "scanned {samples} samples: {} tithi, {} nakshatra, {} karana, {} yoga segments",
        tithi.len(),
        nakshatra.len(),
        karana.len(),
        yoga.len()
    );
    Ok(ScanResult {
        tithi,
        nakshatra,
        karana,
        yoga,
    })
}
