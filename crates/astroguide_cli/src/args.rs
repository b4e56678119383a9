use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "astroguide", version, about = "AstroGuide Vedic astrology demo CLI")]
pub struct Cli {
    /// Config file (default: $ASTROGUIDE_CONFIG, then ./astroguide.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    /// Raise log level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

/// Birth details; anything omitted falls back to the `[birth]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    pub time: Option<String>,
    /// UTC offset of the birth time (+HH:MM, -HH:MM or Z)
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,
    /// Latitude in degrees north
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees east
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a demo birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Add houses, aspects and the current dasha
        #[arg(long)]
        kundali: bool,
    },
    /// Find auspicious windows for an event
    Muhurta {
        /// First day (YYYY-MM-DD, default today UTC)
        #[arg(long)]
        from: Option<String>,
        /// Number of days to scan
        #[arg(long)]
        days: Option<u32>,
        /// Event type (see `events`)
        #[arg(long)]
        event: Option<String>,
        /// Maximum windows to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List event types accepted by `muhurta`
    Events,
    /// Ask the Jyotish assistant one question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Skip the thinking pause
        #[arg(long)]
        no_delay: bool,
    },
    /// Interactive chat with the Jyotish assistant (reads stdin)
    Chat {
        /// Skip the thinking pause
        #[arg(long)]
        no_delay: bool,
    },
    /// Rashi from longitude
    Rashi {
        /// Ecliptic longitude in degrees (sidereal unless --tropical-jd)
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Treat `lon` as tropical and apply Lahiri ayanamsha at this JD
        #[arg(long)]
        tropical_jd: Option<f64>,
    },
    /// Nakshatra and pada from longitude
    Nakshatra {
        /// Ecliptic longitude in degrees (sidereal unless --tropical-jd)
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Treat `lon` as tropical and apply Lahiri ayanamsha at this JD
        #[arg(long)]
        tropical_jd: Option<f64>,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Greenwich and local mean sidereal time at a Julian Date
    Sidereal {
        /// Julian Date (UT)
        jd: f64,
        /// East-positive longitude in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Vimshottari dasha for a birth chart
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Date to report active periods for (YYYY-MM-DD, default today UTC)
        #[arg(long)]
        at: Option<String>,
        /// Levels to show, 1-3 (default from config)
        #[arg(long)]
        levels: Option<u8>,
        /// List every mahadasha instead of the active periods
        #[arg(long)]
        all: bool,
    },
}
