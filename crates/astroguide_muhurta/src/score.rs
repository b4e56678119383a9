//! Additive day score.
//!
//! Starts at [`BASE_SCORE`], adds a bonus for each favorable weekday,
//! tithi, nakshatra and yoga, subtracts a penalty for Vishti karana and
//! clamps the result to [`MIN_SCORE`, `MAX_SCORE`].

use astroguide_vedic_base::{Karana, Nakshatra, Tithi, Vaar, Yoga};

pub const BASE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 20;
pub const MAX_SCORE: i32 = 98;

/// Day scores at or above this are marked favorable.
pub const FAVORABLE_THRESHOLD: i32 = 65;

/// Monday, Wednesday, Thursday, Friday.
pub const FAVORABLE_VAARS: [u8; 4] = [1, 3, 4, 5];
pub const FAVORABLE_TITHIS: [u8; 7] = [1, 2, 3, 4, 6, 10, 11];
pub const FAVORABLE_NAKSHATRAS: [u8; 8] = [0, 3, 6, 7, 12, 14, 21, 26];
pub const FAVORABLE_YOGAS: [u8; 7] = [1, 2, 3, 4, 15, 20, 21];

pub const VAAR_BONUS: i32 = 10;
pub const TITHI_BONUS: i32 = 10;
pub const NAKSHATRA_BONUS: i32 = 15;
pub const YOGA_BONUS: i32 = 10;
pub const VISHTI_PENALTY: i32 = 20;

/// Spread applied per window: `hash mod 10 - 5`.
pub const WINDOW_JITTER_RANGE: u32 = 10;
pub const WINDOW_JITTER_OFFSET: i32 = 5;

/// Clamped score for one day's panchang.
pub fn day_score(vaar: Vaar, tithi: Tithi, nakshatra: Nakshatra, yoga: Yoga, karana: Karana) -> i32 {
    let mut score = BASE_SCORE;
    if FAVORABLE_VAARS.contains(&vaar.index()) {
        score += VAAR_BONUS;
    }
    if FAVORABLE_TITHIS.contains(&tithi.index()) {
        score += TITHI_BONUS;
    }
    if FAVORABLE_NAKSHATRAS.contains(&nakshatra.index()) {
        score += NAKSHATRA_BONUS;
    }
    if FAVORABLE_YOGAS.contains(&yoga.index()) {
        score += YOGA_BONUS;
    }
    if karana.is_vishti() {
        score -= VISHTI_PENALTY;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Window score: the day score shifted by `hash mod 10 - 5`. Not re-clamped.
pub fn window_score(day_score: i32, window_hash: u32) -> i32 {
    day_score + (window_hash % WINDOW_JITTER_RANGE) as i32 - WINDOW_JITTER_OFFSET
}

pub fn is_favorable(day_score: i32) -> bool {
    day_score >= FAVORABLE_THRESHOLD
}
