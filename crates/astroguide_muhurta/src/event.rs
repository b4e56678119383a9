//! Event kinds a muhurta can be searched for.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::MuhurtaError;

/// Life events offered on the muhurta form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Marriage,
    Business,
    Travel,
    Griha,
    Education,
    Medical,
    Vehicle,
    Investment,
}

/// All event kinds in form order.
pub const ALL_EVENT_KINDS: [EventKind; 8] = [
    EventKind::Marriage,
    EventKind::Business,
    EventKind::Travel,
    EventKind::Griha,
    EventKind::Education,
    EventKind::Medical,
    EventKind::Vehicle,
    EventKind::Investment,
];

impl EventKind {
    /// Short key; its length feeds the day seed.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::Business => "business",
            Self::Travel => "travel",
            Self::Griha => "griha",
            Self::Education => "education",
            Self::Medical => "medical",
            Self::Vehicle => "vehicle",
            Self::Investment => "investment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Marriage => "Marriage / Wedding",
            Self::Business => "Business Launch",
            Self::Travel => "Travel / Journey",
            Self::Griha => "Griha Pravesh",
            Self::Education => "Education / Studies",
            Self::Medical => "Medical Procedure",
            Self::Vehicle => "Vehicle Purchase",
            Self::Investment => "Investment / Finance",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Marriage => "💒",
            Self::Business => "🏢",
            Self::Travel => "✈️",
            Self::Griha => "🏠",
            Self::Education => "📚",
            Self::Medical => "🏥",
            Self::Vehicle => "🚗",
            Self::Investment => "💰",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EventKind {
    type Err = MuhurtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_EVENT_KINDS
            .into_iter()
            .find(|e| e.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MuhurtaError::UnknownEvent(s.to_string()))
    }
}
