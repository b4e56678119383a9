//! TOML configuration for the `astroguide` CLI.
//!
//! Every key has a built-in default, so an empty or missing file is valid.

pub mod error;
pub mod load;
pub mod model;

pub use error::ConfigError;
pub use load::{CONFIG_ENV, DEFAULT_CONFIG_FILE, resolve_path};
pub use model::{AppConfig, AssistantSection, BirthSection, ChartSection, MuhurtaSection};
