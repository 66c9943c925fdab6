//! Scanner configuration.

use chrono::Duration;
use panchang_vedic::Locale;

use crate::error::PanchangError;

/// Largest accepted sampling step: one day.
pub const MAX_STEP_SECONDS: i64 = 86_400;

/// Parameters of the sunrise-to-sunset scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Sampling step in seconds. Boundaries are accurate to one step
    /// unless refinement is enabled. Default: 60.
    pub step_seconds: i64,
    /// Rise/set search window in days from 00:00 UTC. Default: 1.0.
    pub search_window_days: f64,
    /// Bisect each detected boundary between its two samples. Default: false.
    pub refine_boundaries: bool,
    /// Bisection tolerance for refined boundaries, seconds. Default: 0.5.
    pub refine_tolerance_seconds: f64,
    /// Name table used for segment and weekday names.
    pub locale: Locale,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step_seconds: 60,
            search_window_days: 1.0,
            refine_boundaries: false,
            refine_tolerance_seconds: 0.5,
            locale: Locale::English,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), PanchangError> {
        if !(1..=MAX_STEP_SECONDS).contains(&self.step_seconds) {
            return Err(PanchangError::InvalidInput(format!(
                "step_seconds must be within [1, {MAX_STEP_SECONDS}], got {}",
                self.step_seconds
            )));
        }
        if !self.search_window_days.is_finite() || self.search_window_days <= 0.0 {
            return Err(PanchangError::InvalidInput(format!(
                "search_window_days must be positive, got {}",
                self.search_window_days
            )));
        }
        if !self.refine_tolerance_seconds.is_finite() || self.refine_tolerance_seconds <= 0.0 {
            return Err(PanchangError::InvalidInput(format!(
                "refine_tolerance_seconds must be positive, got {}",
                self.refine_tolerance_seconds
            )));
        }
        Ok(())
    }

    /// Sampling step as a duration, clamped to `[0, MAX_STEP_SECONDS]`.
    pub fn step(&self) -> Duration {
        Duration::seconds(self.step_seconds.clamp(0, MAX_STEP_SECONDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = ScanConfig::default();
        assert_eq!(c.step_seconds, 60);
        assert!(!c.refine_boundaries);
        assert!(c.validate().is_ok());
        assert_eq!(c.step(), Duration::minutes(1));
    }

    #[test]
    fn rejects_non_positive_values() {
        let bad = [
            ScanConfig {
                step_seconds: 0,
                ..Default::default()
            },
            ScanConfig {
                search_window_days: -1.0,
                ..Default::default()
            },
            ScanConfig {
                search_window_days: f64::NAN,
                ..Default::default()
            },
            ScanConfig {
                refine_tolerance_seconds: 0.0,
                ..Default::default()
            },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(PanchangError::InvalidInput(_))), "{c:?}");
        }
    }

    #[test]
    fn rejects_steps_longer_than_a_day() {
        for step_seconds in [MAX_STEP_SECONDS + 1, 10_000_000_000_000, i64::MAX] {
            let c = ScanConfig {
                step_seconds,
                ..Default::default()
            };
            assert!(matches!(c.validate(), Err(PanchangError::InvalidInput(_))), "{c:?}");
            assert_eq!(c.step(), Duration::days(1));
        }
        let one_day = ScanConfig {
            step_seconds: MAX_STEP_SECONDS,
            ..Default::default()
        };
        assert!(one_day.validate().is_ok());
    }
}
