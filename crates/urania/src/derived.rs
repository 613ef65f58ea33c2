//! Points derived from other chart longitudes.

use crate::angles::normalize_degrees;

/// Arabic-part style lot: `base + plus - minus`, normalized to [0, 360).
pub fn lot(base: f64, plus: f64, minus: f64) -> f64 {
    normalize_degrees(base + plus - minus)
}

/// Pars Fortunae (lot of fortune): Ascendant + Moon - Sun.
pub fn pars_fortunae(sun: f64, moon: f64, ascendant: f64) -> f64 {
    lot(ascendant, moon, sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fortune_borrows_across_zero() {
        assert!((pars_fortunae(350.0, 10.0, 20.0) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn fortune_wraps_past_full_circle() {
        assert!((pars_fortunae(10.0, 350.0, 40.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn fortune_stays_in_range_for_odd_inputs() {
        for (sun, moon, asc) in [
            (0.0, 0.0, 0.0),
            (359.99, 0.0, 0.0),
            (-720.5, 1000.25, 3.0),
            (1e6, -1e6, 12.5),
        ] {
            let f = pars_fortunae(sun, moon, asc);
            assert!((0.0..360.0).contains(&f), "{} out of range", f);
        }
    }
}
