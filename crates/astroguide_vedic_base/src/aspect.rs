//! Major aspects between two ecliptic longitudes.
//!
//! An aspect holds when the folded angular distance lies within `orb`
//! degrees of the aspect angle. Strength falls linearly from 100 at exact
//! to 0 at the edge of the orb.

use serde::Serialize;

use crate::util::angular_distance;

/// Default orb in degrees.
pub const DEFAULT_ORB: f64 = 5.0;

/// The four major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Square,
    Trine,
    Opposition,
}

/// All aspects in increasing angle.
pub const ALL_ASPECTS: [AspectKind; 4] = [
    AspectKind::Conjunction,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact separation in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// Deviation of the separation of `a` and `b` from `kind`'s exact angle.
pub fn aspect_deviation(a: f64, b: f64, kind: AspectKind) -> f64 {
    angular_distance(angular_distance(a, b), kind.angle())
}

pub fn is_in_aspect(a: f64, b: f64, kind: AspectKind, orb: f64) -> bool {
    aspect_deviation(a, b, kind) <= orb
}

/// Strength in percent, 0 outside the orb.
pub fn aspect_strength(a: f64, b: f64, kind: AspectKind, orb: f64) -> f64 {
    let dev = aspect_deviation(a, b, kind);
    if dev > orb {
        return 0.0;
    }
    100.0 * (1.0 - dev / orb)
}

/// The first aspect (in [`ALL_ASPECTS`] order) formed within `orb`.
///
/// With orbs below 15 deg at most one aspect can match.
pub fn find_aspect(a: f64, b: f64, orb: f64) -> Option<(AspectKind, f64)> {
    ALL_ASPECTS
        .into_iter()
        .find(|k| is_in_aspect(a, b, *k, orb))
        .map(|k| (k, aspect_strength(a, b, k, orb)))
}
