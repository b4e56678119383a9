//! Muhurta candidate generation.
//!
//! For each day the pipeline is: day seed, hashed panchang indices, day
//! score, two candidate windows, Rahu Kalam filter. The collected windows
//! are sorted by score, highest first; ties keep generation order.

use astroguide_chart::pseudo_hash;
use astroguide_time::{HourSpan, NaiveDate, days_from, midnight_epoch_millis};
use astroguide_vedic_base::{
    Karana, Nakshatra, Tithi, Vaar, Yoga, gulika_kalam, rahu_kalam,
};
use log::{debug, trace};
use serde::Serialize;

use crate::error::MuhurtaError;
use crate::event::EventKind;
use crate::score::{day_score, is_favorable, window_score};
use crate::types::{MuhurtaQuery, MuhurtaWindow};

/// Hashed panchang for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayPanchang {
    pub date: NaiveDate,
    pub seed: f64,
    pub vaar: Vaar,
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub score: i32,
}

/// `epoch_millis(date 00:00 UTC) + len(event key) * 1000`.
pub fn day_seed(date: NaiveDate, event: EventKind) -> f64 {
    midnight_epoch_millis(date) as f64 + (event.key().len() * 1000) as f64
}

fn hashed_index(seed: f64, salt: f64, modulus: u32) -> u8 {
    (pseudo_hash(seed + salt) % modulus) as u8
}

/// Panchang elements and score for `date`.
pub fn day_panchang(date: NaiveDate, event: EventKind) -> Result<DayPanchang, MuhurtaError> {
    let seed = day_seed(date, event);
    let vaar = Vaar::from_date(date);
    let tithi = Tithi::from_index(hashed_index(seed, 1.0, 15))?;
    let nakshatra = Nakshatra::from_index(hashed_index(seed, 2.0, 27))?;
    let yoga = Yoga::from_index(hashed_index(seed, 3.0, 27))?;
    let karana = Karana::from_index(hashed_index(seed, 4.0, 11))?;
    let score = day_score(vaar, tithi, nakshatra, yoga, karana);
    Ok(DayPanchang {
        date,
        seed,
        vaar,
        tithi,
        nakshatra,
        yoga,
        karana,
        score,
    })
}

/// The morning and late-morning candidate windows for a day seed.
///
/// Starts fall on whole hours (6-8 and 10-12); each lasts 1 or 2 hours.
pub fn candidate_windows(seed: f64) -> [HourSpan; 2] {
    let window = |start_base: f64, salt: f64| {
        let start = start_base + (pseudo_hash(seed + salt) % 3) as f64;
        let duration = 1.0 + (pseudo_hash(seed + (salt + 1.0)) % 2) as f64;
        HourSpan::starting_at(start, duration)
    };
    [window(6.0, 10.0), window(10.0, 12.0)]
}

/// All windows for `query`, sorted by score descending.
pub fn generate_muhurtas(query: &MuhurtaQuery) -> Result<Vec<MuhurtaWindow>, MuhurtaError> {
    let mut results = Vec::with_capacity(query.days as usize * 2);

    for date in days_from(query.from, query.days) {
        let day = day_panchang(date, query.event)?;
        let rahu = rahu_kalam(day.vaar);
        let gulika = gulika_kalam(day.vaar);

        for window in candidate_windows(day.seed) {
            if rahu.contains(window.start) {
                trace!("{date}: window {window} starts in Rahu Kalam {rahu}, skipped");
                continue;
            }
            let score = window_score(day.score, pseudo_hash(day.seed + window.start));
            trace!("{date}: window {window} day score {} -> {score}", day.score);
            results.push(MuhurtaWindow {
                date,
                vaar: day.vaar,
                window,
                tithi: day.tithi,
                nakshatra: day.nakshatra,
                yoga: day.yoga,
                karana: day.karana,
                day_score: day.score,
                score,
                rahu_kalam: rahu,
                gulika_kalam: gulika,
                favorable: is_favorable(day.score),
            });
        }
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(
        "{} windows for {} over {} days from {}",
        results.len(),
        query.event,
        query.days,
        query.from
    );
    Ok(results)
}

/// The best `limit` windows for `query`.
pub fn top_muhurtas(query: &MuhurtaQuery, limit: usize) -> Result<Vec<MuhurtaWindow>, MuhurtaError> {
    let mut all = generate_muhurtas(query)?;
    all.truncate(limit);
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astroguide_time::parse_date;

    #[test]
    fn seed_depends_on_key_length() {
        let d = parse_date("2024-01-01").unwrap();
        assert_eq!(day_seed(d, EventKind::Marriage), 1_704_067_200_000.0 + 8000.0);
        assert_eq!(
            day_seed(d, EventKind::Marriage),
            day_seed(d, EventKind::Business)
        );
        assert_ne!(day_seed(d, EventKind::Marriage), day_seed(d, EventKind::Griha));
    }

    #[test]
    fn windows_in_expected_hours() {
        for k in 0..500 {
            let [a, b] = candidate_windows(1.0e12 + k as f64 * 86_400_000.0);
            assert!((6.0..=8.0).contains(&a.start));
            assert!((10.0..=12.0).contains(&b.start));
            for w in [a, b] {
                assert!(w.duration() == 1.0 || w.duration() == 2.0);
            }
        }
    }

    #[test]
    fn known_day() {
        let d = parse_date("2024-01-05").unwrap();
        let p = day_panchang(d, EventKind::Marriage).unwrap();
        assert_eq!(p.vaar, Vaar::Shukravaar);
        assert_eq!(p.tithi, Tithi::Panchami);
        assert_eq!(p.nakshatra, Nakshatra::Swati);
        assert_eq!(p.yoga, Yoga::Siddha);
        assert_eq!(p.karana, Karana::Taitila);
        assert_eq!(p.score, 95);
    }

    #[test]
    fn top_truncates() {
        let q = MuhurtaQuery::new(parse_date("2024-01-01").unwrap(), 7, EventKind::Marriage).unwrap();
        assert_eq!(top_muhurtas(&q, 10).unwrap().len(), 10);
        assert_eq!(top_muhurtas(&q, 100).unwrap().len(), 13);
    }
}
