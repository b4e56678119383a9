//! Reading, discovering and validating `astroguide.toml`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use astroguide_muhurta::EventKind;
use astroguide_time::{CivilDateTime, parse_date, parse_time, parse_utc_offset};
use log::debug;

use crate::error::ConfigError;
use crate::model::AppConfig;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ASTROGUIDE_CONFIG";

/// File looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "astroguide.toml";

impl AppConfig {
    /// Parse and validate TOML text. `origin` is used in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let cfg: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&text, path)
    }

    /// Load from `explicit`, else `$ASTROGUIDE_CONFIG`, else
    /// `./astroguide.toml` if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_path(explicit, env::var_os(CONFIG_ENV).map(PathBuf::from), Path::new(".")) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check every range constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.birth;
        let date =
            parse_date(&b.date).map_err(|e| ConfigError::invalid("birth.date", e.to_string()))?;
        let time =
            parse_time(&b.time).map_err(|e| ConfigError::invalid("birth.time", e.to_string()))?;
        parse_utc_offset(&b.utc_offset)
            .and_then(|offset| CivilDateTime::new(date, time).with_utc_offset(offset))
            .map_err(|e| ConfigError::invalid("birth.utc_offset", e.to_string()))?;
        if !(-90.0..=90.0).contains(&b.latitude) {
            return Err(ConfigError::invalid(
                "birth.latitude",
                format!("{} is outside [-90, 90]", b.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&b.longitude) {
            return Err(ConfigError::invalid(
                "birth.longitude",
                format!("{} is outside [-180, 180]", b.longitude),
            ));
        }

        let c = &self.chart;
        if !(c.aspect_orb > 0.0 && c.aspect_orb <= 30.0) {
            return Err(ConfigError::invalid(
                "chart.aspect_orb",
                format!("{} is outside (0, 30]", c.aspect_orb),
            ));
        }
        if !(1..=3).contains(&c.dasha_levels) {
            return Err(ConfigError::invalid(
                "chart.dasha_levels",
                format!("{} is outside 1..=3", c.dasha_levels),
            ));
        }

        let m = &self.muhurta;
        if m.days == 0 {
            return Err(ConfigError::invalid("muhurta.days", "must be at least 1"));
        }
        if m.limit == 0 {
            return Err(ConfigError::invalid("muhurta.limit", "must be at least 1"));
        }
        m.event
            .parse::<EventKind>()
            .map_err(|e| ConfigError::invalid("muhurta.event", e.to_string()))?;
        Ok(())
    }
}

/// Pick the config file: explicit path, then the env value, then
/// `DEFAULT_CONFIG_FILE` under `cwd` when it exists.
pub fn resolve_path(explicit: Option<&Path>, from_env: Option<PathBuf>, cwd: &Path) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Some(p);
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}
