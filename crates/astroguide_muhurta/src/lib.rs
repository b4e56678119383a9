//! Muhurta (auspicious window) finder for AstroGuide.
//!
//! Panchang elements are drawn from the same deterministic hash as the
//! demo chart; they are approximations, not lunar/solar calculations.

pub mod error;
pub mod event;
pub mod generator;
pub mod score;
pub mod types;

pub use error::MuhurtaError;
pub use event::{ALL_EVENT_KINDS, EventKind};
pub use generator::{DayPanchang, candidate_windows, day_panchang, day_seed, generate_muhurtas, top_muhurtas};
pub use score::{FAVORABLE_THRESHOLD, day_score, is_favorable, window_score};
pub use types::{DEFAULT_DAYS, DEFAULT_LIMIT, MuhurtaQuery, MuhurtaWindow, ScoreBand};
