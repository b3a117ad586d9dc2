// Plain data describing what the dashboard shows. Renderers only read these types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::format::{
    TyreBand, format_gap, format_points_delta, format_time, format_tyre_degradation, team_color,
};
use crate::season::{RaceResult, StandingEntry};

#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Standings,
}

impl View {
    pub const ALL: [View; 2] = [View::Dashboard, View::Standings];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Standings => "standings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Standings => "Standings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

/// Header fields above the tables. Each render only overwrites the fields it owns.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub title: String,
    pub round: String,
    pub weather: String,
    pub temperature: String,
    pub timer: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapTone {
    Leader,
    Behind,
    Dnf,
}

impl GapTone {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Leader => "#ffffff",
            Self::Behind => "#c5c6c7",
            Self::Dnf => "#ff4d4d",
        }
    }
}

pub const TIME_COLOR: &str = "#ffffff";
pub const DNF_TIME_COLOR: &str = "#666666";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub position: i64,
    pub name: String,
    /// Upper-cased team label shown under the driver name
    pub team_label: String,
    pub team_color: &'static str,
    pub is_dnf: bool,
    pub gap: String,
    pub gap_tone: GapTone,
    pub time: String,
    pub pits: i64,
    pub tyre_degradation: String,
    pub tyre_band: TyreBand,
    pub overtakes: i64,
    pub points: String,
}

impl ResultRow {
    pub fn from_result(index: usize, result: &RaceResult, leader_time: f64) -> Self {
        let is_dnf = result.is_dnf();
        let gap_tone = if index == 0 {
            GapTone::Leader
        } else if is_dnf {
            GapTone::Dnf
        } else {
            GapTone::Behind
        };

        Self {
            position: result.position,
            name: result.name.clone(),
            team_label: result.team.to_uppercase(),
            team_color: team_color(&result.team),
            is_dnf,
            gap: format_gap(index, result.time, leader_time, is_dnf),
            gap_tone,
            time: format_time(result.time),
            pits: result.pits,
            tyre_degradation: format_tyre_degradation(result.tyre_degradation),
            tyre_band: TyreBand::from_degradation(result.tyre_degradation),
            overtakes: result.overtakes.unwrap_or(0),
            points: format_points_delta(result.points),
        }
    }

    pub fn time_color(&self) -> &'static str {
        if self.is_dnf { DNF_TIME_COLOR } else { TIME_COLOR }
    }

    /// CSS classes of the row: `pos-N`, plus `dnf-row` for retirements.
    pub fn css_classes(&self) -> String {
        if self.is_dnf {
            format!("pos-{} dnf-row", self.position)
        } else {
            format!("pos-{}", self.position)
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StandingRow {
    pub rank: i64,
    pub name: String,
    pub team: String,
    pub team_color: &'static str,
    pub points: String,
    pub total_time: String,
}

impl From<&StandingEntry> for StandingRow {
    fn from(entry: &StandingEntry) -> Self {
        Self {
            rank: entry.rank,
            name: entry.name.clone(),
            team: entry.team.clone(),
            team_color: team_color(&entry.team),
            points: entry.points.to_string(),
            total_time: format_time(entry.total_time),
        }
    }
}

/// The full rendered surface of one dashboard instance.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Screen {
    pub header: Header,
    pub active_view: View,
    pub race_rows: Vec<ResultRow>,
    pub standing_rows: Vec<StandingRow>,
}

impl Screen {
    pub fn is_visible(&self, view: View) -> bool {
        self.active_view == view
    }
}
