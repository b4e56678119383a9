//! Configuration sections and their defaults.

use serde::{Deserialize, Serialize};

/// Default birth details for `chart` when none are given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BirthSection {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: String,
    /// Free-text place label; only displayed.
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `+HH:MM`, `-HH:MM` or `Z`.
    pub utc_offset: String,
}

impl Default for BirthSection {
    fn default() -> Self {
        Self {
            date: "1990-01-15".to_string(),
            time: "06:30".to_string(),
            place: "Mumbai, India".to_string(),
            latitude: 19.076,
            longitude: 72.8777,
            utc_offset: "+00:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    /// Aspect orb in degrees, (0, 30].
    pub aspect_orb: f64,
    /// Number of dasha levels to compute, 1-3.
    pub dasha_levels: u8,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            aspect_orb: 5.0,
            dasha_levels: 2,
        }
    }
}

impl ChartSection {
    /// Deepest 0-based dasha level.
    pub fn dasha_max_level(&self) -> u8 {
        self.dasha_levels.saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MuhurtaSection {
    pub days: u32,
    /// Event key, e.g. `marriage`.
    pub event: String,
    pub limit: usize,
}

impl Default for MuhurtaSection {
    fn default() -> Self {
        Self {
            days: astroguide_muhurta::DEFAULT_DAYS,
            event: "marriage".to_string(),
            limit: astroguide_muhurta::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantSection {
    pub think_base_ms: u64,
    pub think_jitter_ms: u64,
}

impl Default for AssistantSection {
    fn default() -> Self {
        Self {
            think_base_ms: astroguide_assistant::DEFAULT_BASE_MS,
            think_jitter_ms: astroguide_assistant::DEFAULT_JITTER_MS,
        }
    }
}

/// Root of `astroguide.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub birth: BirthSection,
    pub chart: ChartSection,
    pub muhurta: MuhurtaSection,
    pub assistant: AssistantSection,
}
