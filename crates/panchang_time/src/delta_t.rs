//! ΔT = TT − UT, the drift of Earth rotation against atomic time.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon,
//! 2006) for 1800–2150, with the Morrison & Stephenson long-term parabola
//! outside that span. Typical error since 1900 is below one second, well
//! under the one-minute cadence of the panchang scanner.

use crate::julian::decimal_year;

/// Long-term parabola: −20 + 32·u², u = (y − 1820) / 100.
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds_for_year(y: f64) -> f64 {
    match y {
        y if y < 1800.0 => long_term(y),
        y if y < 1860.0 => {
            let t = y - 1800.0;
            13.72 - 0.332447 * t + 0.006_861_2 * t.powi(2) + 0.004_111_6 * t.powi(3)
                - 0.000_374_36 * t.powi(4)
                + 0.000_012_127_2 * t.powi(5)
                - 0.000_000_169_9 * t.powi(6)
                + 0.000_000_000_875 * t.powi(7)
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
                - 0.000_447_362_4 * t.powi(4)
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
                - 0.000_197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
                + 0.001_727_5 * t.powi(3)
                + 0.000_651_814 * t.powi(4)
                + 0.000_023_735_99 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// ΔT in seconds for a Julian Date on the UT axis.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    delta_t_seconds_for_year(decimal_year(jd_ut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn delta_t_2000() {
        // IERS value ~63.8 s
        let dt = delta_t_seconds(J2000_JD);
        assert!((dt - 63.83).abs() < 0.5, "ΔT(2000) = {dt}");
    }

    #[test]
    fn delta_t_1950() {
        // Tabulated ~29.1 s
        let dt = delta_t_seconds_for_year(1950.0);
        assert!((dt - 29.07).abs() < 1e-9, "ΔT(1950) = {dt}");
    }

    #[test]
    fn delta_t_2024_plausible() {
        let dt = delta_t_seconds_for_year(2024.0);
        assert!(dt > 60.0 && dt < 80.0, "ΔT(2024) = {dt}");
    }

    #[test]
    fn segments_join_without_large_jumps() {
        for boundary in [1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds_for_year(boundary - 1e-6);
            let after = delta_t_seconds_for_year(boundary);
            assert!(
                (after - before).abs() < 2.0,
                "ΔT jumps {before} -> {after} at {boundary}"
            );
        }
    }

    #[test]
    fn long_term_is_continuous_at_2150() {
        let before = delta_t_seconds_for_year(2150.0 - 1e-9);
        let after = delta_t_seconds_for_year(2150.0);
        assert!((after - before).abs() < 1e-3);
    }
}
