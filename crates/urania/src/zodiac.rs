//! Zodiac sign classification.
//!
//! The twelve signs split the ecliptic into equal 30° segments starting at
//! 0° Aries.

use serde::{Deserialize, Serialize};

pub const SIGN_COUNT: usize = 12;
pub const SIGN_SPAN: f64 = 30.0;

/// Static description of one zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignMeta {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Sign names, glyphs and wheel colours in zodiac order
pub const SIGNS: [SignMeta; SIGN_COUNT] = [
    SignMeta { name: "Aries", glyph: "♈\u{fe0e}", color: "#E34234" },
    SignMeta { name: "Taurus", glyph: "♉\u{fe0e}", color: "#8BC34A" },
    SignMeta { name: "Gemini", glyph: "♊\u{fe0e}", color: "#FFEB3B" },
    SignMeta { name: "Cancer", glyph: "♋\u{fe0e}", color: "#E6E6E6" },
    SignMeta { name: "Leo", glyph: "♌\u{fe0e}", color: "#F9D71C" },
    SignMeta { name: "Virgo", glyph: "♍\u{fe0e}", color: "#BFD9BF" },
    SignMeta { name: "Libra", glyph: "♎\u{fe0e}", color: "#F4C6D4" },
    SignMeta { name: "Scorpio", glyph: "♏\u{fe0e}", color: "#673AB7" },
    SignMeta { name: "Sagittarius", glyph: "♐\u{fe0e}", color: "#00A0B0" },
    SignMeta { name: "Capricorn", glyph: "♑\u{fe0e}", color: "#3E2723" },
    SignMeta { name: "Aquarius", glyph: "♒\u{fe0e}", color: "#1565C0" },
    SignMeta { name: "Pisces", glyph: "♓\u{fe0e}", color: "#607D8B" },
];

/// A longitude split into its sign and the offset inside that sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    /// Sign index 0-11 (0 = Aries)
    pub sign: usize,
    /// Degrees into the sign, 0 <= offset < 30
    pub offset: f64,
}

impl SignPosition {
    pub fn meta(&self) -> &'static SignMeta {
        sign_meta(self.sign)
    }
}

/// Classify a normalized longitude into sign and sign offset.
pub fn classify(longitude: f64) -> SignPosition {
    let segment = (longitude / SIGN_SPAN).floor();
    SignPosition {
        sign: (segment as usize) % SIGN_COUNT,
        offset: longitude - segment * SIGN_SPAN,
    }
}

/// Get sign index (0-11) from longitude
pub fn sign_index(longitude: f64) -> usize {
    classify(longitude).sign
}

pub fn sign_meta(sign: usize) -> &'static SignMeta {
    &SIGNS[sign % SIGN_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let p = classify(0.0);
        assert_eq!(p.sign, 0);
        assert_eq!(p.offset, 0.0);

        let p = classify(30.0);
        assert_eq!(p.sign, 1);
        assert_eq!(p.offset, 0.0);

        let p = classify(359.5);
        assert_eq!(p.sign, 11);
        assert!((p.offset - 29.5).abs() < 1e-12);
    }

    #[test]
    fn classify_recomposes_longitude() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let p = classify(lon);
            assert!(p.sign < SIGN_COUNT);
            assert!(p.offset >= 0.0 && p.offset < SIGN_SPAN);
            assert!((p.sign as f64 * SIGN_SPAN + p.offset - lon).abs() < 1e-9);
            lon += 0.37;
        }
    }

    #[test]
    fn sign_names_in_zodiac_order() {
        assert_eq!(sign_meta(0).name, "Aries");
        assert_eq!(sign_meta(4).name, "Leo");
        assert_eq!(sign_meta(11).name, "Pisces");
        assert_eq!(sign_meta(12).name, "Aries");
    }
}
