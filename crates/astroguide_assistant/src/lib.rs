//! Demo Jyotish chat assistant.
//!
//! Replies come from a fixed table of prepared answers chosen by keyword;
//! there is no retrieval or model behind them.

pub mod delay;
pub mod knowledge;
pub mod session;

pub use delay::{DEFAULT_BASE_MS, DEFAULT_JITTER_MS, ThinkingDelay};
pub use knowledge::{Answer, GREETING, SUGGESTIONS, Topic, classify, find_answer};
pub use session::{ChatSession, Message, Role};
