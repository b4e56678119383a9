//! Period, hierarchy and snapshot types shared by the dasha calculators.

use serde::Serialize;

use crate::graha::Graha;

/// Julian year, used to turn dasha years into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Pratyantardasha.
pub const MAX_DASHA_LEVEL: u8 = 2;

/// Mahadasha plus antardasha.
pub const DEFAULT_DASHA_LEVEL: u8 = 1;

/// Depth in the period tree; the discriminant is the 0-based depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    pub fn from_u8(depth: u8) -> Option<Self> {
        [Self::Mahadasha, Self::Antardasha, Self::Pratyantardasha]
            .get(depth as usize)
            .copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    pub fn child_level(self) -> Option<Self> {
        Self::from_u8(self as u8 + 1)
    }
}

/// One period ruled by one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-based position among its siblings.
    pub order: u16,
    /// Index of the parent in the level above; 0 for mahadashas.
    pub parent_idx: u32,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasha years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// True when `jd` lies in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Every period from mahadasha down to the requested depth.
#[derive(Debug, Clone, Serialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    /// `levels[d]` holds all periods at depth `d`, in time order.
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    /// Children of `levels[depth][parent]`, in order.
    pub fn children_of(&self, depth: usize, parent: usize) -> impl Iterator<Item = &DashaPeriod> {
        self.levels
            .get(depth + 1)
            .into_iter()
            .flatten()
            .filter(move |p| p.parent_idx as usize == parent)
    }
}

/// The chain of periods running at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    /// Outermost first; empty outside the cycle.
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start_jd: f64, end_jd: f64) -> DashaPeriod {
        DashaPeriod {
            graha: Graha::Rahu,
            start_jd,
            end_jd,
            level: DashaLevel::Antardasha,
            order: 3,
            parent_idx: 0,
        }
    }

    #[test]
    fn level_depths() {
        for depth in 0..=MAX_DASHA_LEVEL {
            assert_eq!(DashaLevel::from_u8(depth).map(|l| l as u8), Some(depth));
        }
        assert!(DashaLevel::from_u8(MAX_DASHA_LEVEL + 1).is_none());
        assert_eq!(DashaLevel::Antardasha.child_level(), Some(DashaLevel::Pratyantardasha));
        assert!(DashaLevel::Pratyantardasha.child_level().is_none());
    }

    #[test]
    fn contains_excludes_end() {
        let p = period(2_450_000.0, 2_450_365.25);
        assert!(p.contains(2_450_000.0));
        assert!(p.contains(2_450_365.0));
        assert!(!p.contains(2_450_365.25));
        assert!((p.duration_years() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn children_filter_by_parent() {
        let mut a = period(0.0, 1.0);
        a.parent_idx = 0;
        let mut b = period(1.0, 2.0);
        b.parent_idx = 1;
        let h = DashaHierarchy {
            birth_jd: 0.0,
            levels: vec![vec![period(0.0, 1.0), period(1.0, 2.0)], vec![a, b]],
        };
        let kids: Vec<_> = h.children_of(0, 1).collect();
        assert_eq!(kids.len(), 1);
        assert_eq!(kids[0].start_jd, 1.0);
        assert_eq!(h.children_of(1, 0).count(), 0);
    }
}
