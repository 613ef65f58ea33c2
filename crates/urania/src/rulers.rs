//! Classical sign rulerships.
//!
//! Only the seven visible planets hold classical rulership, so every sign
//! resolves to one of them.

use crate::points::PointId;
use crate::zodiac::{sign_index, SIGN_COUNT};

/// Signs ruled by each classical planet, in catalogue order
const RULING_SIGNS: &[(PointId, &[usize])] = &[
    (PointId::Sun, &[4]),         // Leo
    (PointId::Moon, &[3]),        // Cancer
    (PointId::Mercury, &[2, 5]),  // Gemini, Virgo
    (PointId::Venus, &[1, 6]),    // Taurus, Libra
    (PointId::Mars, &[0, 7]),     // Aries, Scorpio
    (PointId::Jupiter, &[8, 11]), // Sagittarius, Pisces
    (PointId::Saturn, &[9, 10]),  // Capricorn, Aquarius
];

/// Get sign ruler (classical rulership)
pub fn classical_ruler(sign: usize) -> Option<PointId> {
    let sign = sign % SIGN_COUNT;
    RULING_SIGNS
        .iter()
        .find(|(_, signs)| signs.contains(&sign))
        .map(|(planet, _)| *planet)
}

/// Get sign ruler from longitude
pub fn classical_ruler_from_longitude(longitude: f64) -> Option<PointId> {
    classical_ruler(sign_index(longitude))
}

/// Signs a planet rules; empty for points without classical rulership.
pub fn ruled_signs(planet: PointId) -> &'static [usize] {
    RULING_SIGNS
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, signs)| *signs)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_rulers() {
        assert_eq!(classical_ruler(0), Some(PointId::Mars)); // Aries
        assert_eq!(classical_ruler(3), Some(PointId::Moon)); // Cancer
        assert_eq!(classical_ruler(4), Some(PointId::Sun)); // Leo
        assert_eq!(classical_ruler(7), Some(PointId::Mars)); // Scorpio
        assert_eq!(classical_ruler(10), Some(PointId::Saturn)); // Aquarius
        assert_eq!(classical_ruler(11), Some(PointId::Jupiter)); // Pisces
    }

    #[test]
    fn test_every_sign_has_a_ruler() {
        for sign in 0..SIGN_COUNT {
            assert!(classical_ruler(sign).is_some(), "sign {} has no ruler", sign);
        }
    }

    #[test]
    fn test_modern_planets_rule_nothing() {
        assert!(ruled_signs(PointId::Uranus).is_empty());
        assert!(ruled_signs(PointId::Pluto).is_empty());
        assert_eq!(ruled_signs(PointId::Venus), &[1, 6]);
    }

    #[test]
    fn test_ruler_from_longitude() {
        assert_eq!(classical_ruler_from_longitude(135.0), Some(PointId::Sun));
        assert_eq!(classical_ruler_from_longitude(359.9), Some(PointId::Jupiter));
    }
}
