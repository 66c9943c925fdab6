//! Bracketing and bisection over a scalar function of time.
//!
//! The time axis is an `f64` offset (seconds or days, the caller decides)
//! so the same routines serve rise/set search and segment boundary
//! refinement. The error type is generic so callers keep their own.

/// Direction of a sign change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Negative to non-negative.
    Ascending,
    /// Positive to non-positive.
    Descending,
}

impl Crossing {
    fn matches(self, before: f64, after: f64) -> bool {
        match self {
            Self::Ascending => before < 0.0 && after >= 0.0,
            Self::Descending => before > 0.0 && after <= 0.0,
        }
    }
}

/// Walk `[start, end]` in steps of `step` and return the first bracket
/// `(lo, hi)` over which `f` changes sign in the requested direction.
///
/// The last step is clamped to `end`. Returns `Ok(None)` when no such
/// bracket exists.
pub fn find_crossing<F, E>(
    mut f: F,
    start: f64,
    end: f64,
    step: f64,
    crossing: Crossing,
) -> Result<Option<(f64, f64)>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    if step.is_nan() || step <= 0.0 || end < start {
        return Ok(None);
    }
    let mut lo = start;
    let mut f_lo = f(lo)?;
    while lo < end {
        let hi = (lo + step).min(end);
        let f_hi = f(hi)?;
        if crossing.matches(f_lo, f_hi) {
            return Ok(Some((lo, hi)));
        }
        lo = hi;
        f_lo = f_hi;
    }
    Ok(None)
}

/// Narrow a bracket `(lo, hi)` until it is no wider than `tolerance`.
///
/// `inside(x)` must be true at `lo` and false at `hi`; the returned value is
/// the smallest evaluated `x` where `inside` was false, i.e. the first instant
/// past the transition to within `tolerance`.
pub fn bisect_transition<F, E>(
    mut inside: F,
    mut lo: f64,
    mut hi: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<bool, E>,
{
    for _ in 0..max_iterations {
        if hi - lo <= tolerance {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if inside(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(hi)
}

/// Refine a sign-change bracket of `f` to within `tolerance`.
///
/// Thin wrapper over [`bisect_transition`] that keeps the sign of `f(lo)`.
pub fn bisect_root<F, E>(
    mut f: F,
    lo: f64,
    hi: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let below = f(lo)? < 0.0;
    bisect_transition(
        |x| Ok((f(x)? < 0.0) == below),
        lo,
        hi,
        tolerance,
        max_iterations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ok(v: f64) -> Result<f64, Infallible> {
        Ok(v)
    }

    #[test]
    fn finds_first_ascending_crossing() {
        let found = find_crossing(|x| ok(x.sin()), 0.1, 10.0, 0.5, Crossing::Ascending).unwrap();
        let (lo, hi) = found.expect("sin ascends through 2π");
        assert!(lo < std::f64::consts::TAU && hi >= std::f64::consts::TAU);
    }

    #[test]
    fn finds_descending_crossing() {
        let found = find_crossing(|x| ok(x.sin()), 0.1, 10.0, 0.5, Crossing::Descending).unwrap();
        let (lo, hi) = found.expect("sin descends through π");
        assert!(lo < std::f64::consts::PI && hi >= std::f64::consts::PI);
    }

    #[test]
    fn no_crossing_returns_none() {
        let found = find_crossing(|x| ok(x + 1.0), 0.0, 5.0, 0.25, Crossing::Ascending).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn final_step_is_clamped_to_end() {
        // Root at 0.95; steps of 0.6 would overshoot end=1.0 without clamping.
        let found = find_crossing(|x| ok(x - 0.95), 0.0, 1.0, 0.6, Crossing::Ascending).unwrap();
        assert_eq!(found, Some((0.6, 1.0)));
    }

    #[test]
    fn non_positive_step_yields_none() {
        let found = find_crossing(|x| ok(x), -1.0, 1.0, 0.0, Crossing::Ascending).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn bisect_root_converges() {
        let root = bisect_root(|x| ok(x * x - 2.0), 1.0, 2.0, 1e-10, 100).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn bisect_transition_returns_first_outside_point() {
        let edge = bisect_transition(|x| Ok::<_, Infallible>(x < 3.3), 0.0, 10.0, 1e-6, 100)
            .unwrap();
        assert!(edge >= 3.3 && edge - 3.3 < 1e-6, "edge = {edge}");
    }

    #[test]
    fn errors_propagate() {
        let result: Result<Option<(f64, f64)>, &str> =
            find_crossing(|_| Err("boom"), 0.0, 1.0, 0.1, Crossing::Ascending);
        assert_eq!(result, Err("boom"));
    }
}
