// Season dataset produced by the external build step

use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::{load_season, parse_season};

/// A complete season: every race in calendar order plus the final standings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Season {
    pub races: Vec<Race>,
    pub standings: Vec<StandingEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub race_id: i64,
    pub track_name: String,
    #[serde(default)]
    pub weather: Option<String>,
    /// Finishing classification, leader first. The producer guarantees the order.
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

impl Race {
    /// Weather label with empty values treated as missing.
    pub fn weather(&self) -> Option<&str> {
        self.weather.as_deref().filter(|w| !w.is_empty())
    }

    pub fn leader(&self) -> Option<&RaceResult> {
        self.results.first()
    }
}

pub const DNF_STATUS: &str = "DNF";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub position: i64,
    pub name: String,
    pub team: String,
    /// Total race time in seconds
    pub time: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pits: i64,
    /// Tyre wear, 0-100
    #[serde(default)]
    pub tyre_degradation: f64,
    #[serde(default)]
    pub overtakes: Option<i64>,
    #[serde(default)]
    pub points: f64,
}

impl RaceResult {
    pub fn is_dnf(&self) -> bool {
        self.status.as_deref() == Some(DNF_STATUS)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub rank: i64,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub points: f64,
    /// Cumulative race time over the season, in seconds
    #[serde(default)]
    pub total_time: f64,
}
