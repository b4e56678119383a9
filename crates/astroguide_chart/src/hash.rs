//! Deterministic pseudo-random hash behind the demo ephemeris.
//!
//! All arithmetic is done in `f64` and reduced with JavaScript `>>> 0`
//! (ToUint32) semantics, so a given seed always lands on the same value
//! regardless of platform.

/// Knuth multiplicative constant (2^32 / golden ratio).
pub const HASH_MULTIPLIER: f64 = 2_654_435_761.0;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// ToUint32: truncate toward zero, reduce modulo 2^32. Non-finite input
/// maps to 0.
pub fn to_uint32(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    let mut m = x.trunc() % TWO_POW_32;
    if m < 0.0 {
        m += TWO_POW_32;
    }
    m as u32
}

/// `ToUint32(n * HASH_MULTIPLIER)`.
pub fn pseudo_hash(n: f64) -> u32 {
    to_uint32(n * HASH_MULTIPLIER)
}

/// `pseudo_hash(n) mod 360`, a whole-degree longitude.
pub fn hash_degrees(n: f64) -> u32 {
    pseudo_hash(n) % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint32_small_values() {
        assert_eq!(to_uint32(0.0), 0);
        assert_eq!(to_uint32(7.9), 7);
        assert_eq!(to_uint32(-0.5), 0);
    }

    #[test]
    fn uint32_negative_wraps() {
        assert_eq!(to_uint32(-1.0), u32::MAX);
        assert_eq!(to_uint32(-4_294_967_297.0), u32::MAX);
    }

    #[test]
    fn uint32_large_values() {
        assert_eq!(to_uint32(TWO_POW_32 + 5.0), 5);
        // 2^53 + 1 is not representable; the product collapses to 2^53.
        assert_eq!(to_uint32(9_007_199_254_740_993.0), 0);
        assert_eq!(to_uint32(1.0e300), 0);
    }

    #[test]
    fn uint32_non_finite() {
        assert_eq!(to_uint32(f64::NAN), 0);
        assert_eq!(to_uint32(f64::INFINITY), 0);
        assert_eq!(to_uint32(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn hash_known_values() {
        assert_eq!(pseudo_hash(1.0), 2_654_435_761);
        assert_eq!(pseudo_hash(1.5), 3_981_653_641);
        assert_eq!(hash_degrees(1.0), 2_654_435_761 % 360);
    }

    #[test]
    fn hash_degrees_in_range() {
        let mut n = -1.0e12;
        while n < 1.0e12 {
            assert!(hash_degrees(n) < 360);
            n += 7.77e9;
        }
    }
}
