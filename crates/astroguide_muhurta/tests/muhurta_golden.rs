//! Muhurta generation over a known week.

use astroguide_muhurta::{ALL_EVENT_KINDS, EventKind, MuhurtaQuery, generate_muhurtas};
use astroguide_time::parse_date;
use astroguide_vedic_base::RAHU_KALAM_START;

fn week(event: EventKind) -> MuhurtaQuery {
    MuhurtaQuery::new(parse_date("2024-01-01").unwrap(), 7, event).unwrap()
}

#[test]
fn first_week_of_2024_for_marriage() {
    let windows = generate_muhurtas(&week(EventKind::Marriage)).unwrap();
    let summary: Vec<(String, String, i32)> = windows
        .iter()
        .map(|w| (w.date.to_string(), w.window.to_string(), w.score))
        .collect();
    let expected = [
        ("2024-01-05", "06:00 – 07:00", 98),
        ("2024-01-05", "10:00 – 11:00", 92),
        ("2024-01-01", "10:00 – 11:00", 73),
        ("2024-01-03", "07:00 – 08:00", 73),
        ("2024-01-06", "08:00 – 09:00", 69),
        ("2024-01-01", "06:00 – 07:00", 67),
        ("2024-01-03", "11:00 – 12:00", 67),
        ("2024-01-02", "07:00 – 08:00", 62),
        ("2024-01-02", "10:00 – 11:00", 62),
        ("2024-01-04", "11:00 – 12:00", 59),
        ("2024-01-04", "06:00 – 07:00", 57),
        ("2024-01-07", "07:00 – 08:00", 53),
        ("2024-01-07", "10:00 – 11:00", 53),
    ];
    let expected: Vec<(String, String, i32)> = expected
        .iter()
        .map(|(d, w, s)| (d.to_string(), w.to_string(), *s))
        .collect();
    assert_eq!(summary, expected);
}

#[test]
fn saturday_late_window_falls_in_rahu_kalam() {
    let windows = generate_muhurtas(&week(EventKind::Marriage)).unwrap();
    let saturday: Vec<_> = windows
        .iter()
        .filter(|w| w.date.to_string() == "2024-01-06")
        .collect();
    assert_eq!(saturday.len(), 1);
    assert_eq!(saturday[0].rahu_kalam.to_string(), "09:00 – 10:30");
    assert_eq!(saturday[0].gulika_kalam.to_string(), "06:00 – 07:30");
}

#[test]
fn favorable_tracks_day_score() {
    for w in generate_muhurtas(&week(EventKind::Marriage)).unwrap() {
        assert_eq!(w.favorable, w.day_score >= 65);
        assert!((w.score - w.day_score).abs() <= 5);
        assert!((20..=98).contains(&w.day_score));
    }
}

#[test]
fn sorted_and_clear_of_rahu_kalam_for_every_event() {
    let from = parse_date("2023-10-01").unwrap();
    for event in ALL_EVENT_KINDS {
        let q = MuhurtaQuery::new(from, 60, event).unwrap();
        let windows = generate_muhurtas(&q).unwrap();
        assert!(windows.len() >= 60);
        for pair in windows.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for w in &windows {
            let rahu = RAHU_KALAM_START[w.vaar.index() as usize];
            assert!(!(w.window.start >= rahu && w.window.start < rahu + 1.5));
        }
    }
}

#[test]
fn json_shape() {
    let windows = generate_muhurtas(&week(EventKind::Travel)).unwrap();
    let json = serde_json::to_value(&windows[0]).unwrap();
    for key in ["date", "vaar", "window", "tithi", "nakshatra", "yoga", "karana", "score", "favorable"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn range_ending_on_last_calendar_day() {
    let last = astroguide_time::NaiveDate::MAX;
    let from = last.pred_opt().unwrap();
    let q = MuhurtaQuery::new(from, 2, EventKind::Business).unwrap();
    let windows = generate_muhurtas(&q).unwrap();
    assert!(windows.iter().all(|w| w.date == from || w.date == last));
    assert!(windows.iter().any(|w| w.date == last));
}
