//! Vimshottari dasha engine.
//!
//! Computation tiers:
//! - Level-0 (mahadasha) generation from the birth balance
//! - All children of one parent (proportional, starting with the parent lord)
//! - Complete level from the parent level
//! - Full hierarchy (levels 0..N)
//! - Snapshot-only path (no full materialization)

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

use super::balance::nakshatra_birth_balance;
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL,
};

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha lengths in years, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of one full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

fn sequence_position(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|g| *g == graha)
        .unwrap_or(0)
}

/// Mahadasha length of `graha` in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Lord of the first mahadasha for a birth nakshatra.
///
/// Ashwini, Magha and Mula start with Ketu; each following nakshatra
/// advances one step through the sequence.
pub fn starting_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index.min(26) % 9) as usize]
}

/// Generate the nine mahadashas of one cycle from birth.
///
/// The first period is shortened to the birth balance.
pub fn vimshottari_level0(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let start = (nak_idx % 9) as usize;
    let entry_days = VIMSHOTTARI_YEARS[start] * DAYS_PER_YEAR;
    let balance_days = nakshatra_birth_balance(lon, entry_days).balance_days;

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;
    for offset in 0..9 {
        let seq_idx = (start + offset) % 9;
        let duration = if offset == 0 {
            balance_days
        } else {
            VIMSHOTTARI_YEARS[seq_idx] * DAYS_PER_YEAR
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            graha: VIMSHOTTARI_SEQUENCE[seq_idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: offset as u16 + 1,
            parent_idx: 0,
        });
        cursor = end;
    }
    periods
}

/// Sub-periods of `parent`, each proportional to its lord's mahadasha
/// length and starting with the parent's own lord.
///
/// The last child's end is snapped to the parent's end. Returns an empty
/// list for the deepest level.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let start = sequence_position(parent.graha);
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for offset in 0..9 {
        let seq_idx = (start + offset) % 9;
        let duration = VIMSHOTTARI_YEARS[seq_idx] / VIMSHOTTARI_TOTAL_YEARS * parent_duration;
        let end = cursor + duration;
        children.push(DashaPeriod {
            graha: VIMSHOTTARI_SEQUENCE[seq_idx],
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: offset as u16 + 1,
            parent_idx,
        });
        cursor = end;
    }

    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

/// All children of every period in `parent_level`.
pub fn vimshottari_complete_level(parent_level: &[DashaPeriod]) -> Vec<DashaPeriod> {
    parent_level
        .iter()
        .enumerate()
        .flat_map(|(pidx, parent)| vimshottari_children(parent, pidx as u32))
        .collect()
}

fn check_level(max_level: u8) -> Result<(), VedicError> {
    if max_level > MAX_DASHA_LEVEL {
        return Err(VedicError::InvalidInput(
            "dasha level must be 0 (maha), 1 (antar) or 2 (pratyantar)",
        ));
    }
    Ok(())
}

/// Calculate all levels from 0 to `max_level` (at most [`MAX_DASHA_LEVEL`]).
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    check_level(max_level)?;
    let mut levels = vec![vimshottari_level0(birth_jd, moon_sidereal_lon)];
    for depth in 1..=max_level as usize {
        let next = vimshottari_complete_level(&levels[depth - 1]);
        levels.push(next);
    }
    Ok(DashaHierarchy { birth_jd, levels })
}

/// Index of the period containing `jd`, if any.
///
/// `periods` must be contiguous and sorted by start.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Active periods at `query_jd` down to `max_level`, without
/// materializing the full hierarchy.
///
/// The snapshot is empty when `query_jd` falls outside the 120-year cycle.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    max_level: u8,
) -> Result<DashaSnapshot, VedicError> {
    check_level(max_level)?;
    let level0 = vimshottari_level0(birth_jd, moon_sidereal_lon);
    let mut periods = Vec::with_capacity(max_level as usize + 1);

    if let Some(idx) = find_active_period(&level0, query_jd) {
        let mut current = level0[idx];
        periods.push(current);
        for _ in 0..max_level {
            let children = vimshottari_children(&current, 0);
            match find_active_period(&children, query_jd) {
                Some(i) => {
                    current = children[i];
                    periods.push(current);
                }
                None => break,
            }
        }
    }

    Ok(DashaSnapshot { query_jd, periods })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn sequence_sums_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn starting_lords() {
        assert_eq!(starting_lord(0), Graha::Ketu);
        assert_eq!(starting_lord(9), Graha::Ketu);
        assert_eq!(starting_lord(18), Graha::Ketu);
        assert_eq!(starting_lord(3), Graha::Chandra);
        assert_eq!(starting_lord(26), Graha::Buddh);
    }

    #[test]
    fn ashwini_start_has_full_ketu() {
        let periods = vimshottari_level0(BIRTH, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].graha, Graha::Ketu);
        assert!((periods[0].duration_years() - 7.0).abs() < 1e-9);
        let total = periods[8].end_jd - BIRTH;
        assert!((total / DAYS_PER_YEAR - 120.0).abs() < 1e-9);
    }

    #[test]
    fn mid_rohini_halves_moon() {
        let lon = 3.5 * NAKSHATRA_SPAN_27;
        let periods = vimshottari_level0(BIRTH, lon);
        assert_eq!(periods[0].graha, Graha::Chandra);
        assert!((periods[0].duration_years() - 5.0).abs() < 1e-9);
        assert_eq!(periods[1].graha, Graha::Mangal);
        let total = (periods[8].end_jd - BIRTH) / DAYS_PER_YEAR;
        assert!((total - 115.0).abs() < 1e-9);
    }

    #[test]
    fn children_tile_parent() {
        let level0 = vimshottari_level0(BIRTH, 100.0);
        let parent = level0[2];
        let children = vimshottari_children(&parent, 2);
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].graha, parent.graha);
        assert_eq!(children[0].start_jd, parent.start_jd);
        assert_eq!(children[8].end_jd, parent.end_jd);
        for pair in children.windows(2) {
            assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
        }
        assert!(children.iter().all(|c| c.parent_idx == 2));
    }

    #[test]
    fn ketu_antar_in_ketu_maha() {
        // Ketu/Ketu = 7 * 7 / 120 years
        let level0 = vimshottari_level0(BIRTH, 0.0);
        let children = vimshottari_children(&level0[0], 0);
        assert!((children[0].duration_years() - 49.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn hierarchy_depths() {
        let h = vimshottari_hierarchy(BIRTH, 200.0, 2).unwrap();
        assert_eq!(h.levels.len(), 3);
        assert_eq!(h.levels[1].len(), 81);
        assert_eq!(h.levels[2].len(), 729);
        assert_eq!(h.children_of(0, 4).count(), 9);
        assert!(vimshottari_hierarchy(BIRTH, 200.0, 3).is_err());
    }

    #[test]
    fn snapshot_matches_hierarchy() {
        let query = BIRTH + 30.0 * DAYS_PER_YEAR + 17.0;
        let h = vimshottari_hierarchy(BIRTH, 77.7, 2).unwrap();
        let snap = vimshottari_snapshot(BIRTH, 77.7, query, 2).unwrap();
        assert_eq!(snap.periods.len(), 3);
        for (depth, active) in snap.periods.iter().enumerate() {
            let idx = find_active_period(&h.levels[depth], query).unwrap();
            assert_eq!(h.levels[depth][idx].graha, active.graha);
            assert!(active.contains(query));
        }
    }

    #[test]
    fn snapshot_outside_cycle_is_empty() {
        let snap = vimshottari_snapshot(BIRTH, 0.0, BIRTH - 1.0, 1).unwrap();
        assert!(snap.periods.is_empty());
    }
}
