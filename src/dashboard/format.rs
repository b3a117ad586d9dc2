// Display formatting for race and standings tables

use serde::Serialize;

pub const ZERO_TIME: &str = "0:00.000";
pub const DNF_GAP: &str = "DNF";
pub const DEFAULT_WEATHER: &str = "Sunny";
pub const FALLBACK_TEAM_COLOR: &str = "#FFFFFF";

const SECONDS_PER_HOUR: u64 = 3600;
const MILLIS_PER_SECOND: u64 = 1000;

const TEAM_COLORS: [(&str, &str); 10] = [
    ("Red Bull", "#3671C6"),
    ("Mercedes", "#27F4D2"),
    ("Ferrari", "#E80020"),
    ("McLaren", "#FF8000"),
    ("Aston Martin", "#22594D"),
    ("Alpine", "#0093CC"),
    ("Williams", "#64C4FF"),
    ("Haas", "#B6BABD"),
    ("Kick Sauber", "#52E252"),
    ("RB", "#6692FF"),
];

/// Formats a duration in seconds as `H:MM:SS.mmm`, or `M:SS.mmm` below one hour.
///
/// Non-finite and negative inputs format as [`ZERO_TIME`].
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0. {
        return ZERO_TIME.to_string();
    }

    // round once so the seconds field can never print as 60.000
    let total_ms = (seconds * MILLIS_PER_SECOND as f64).round() as u64;
    let millis = total_ms % MILLIS_PER_SECOND;
    let total_s = total_ms / MILLIS_PER_SECOND;
    let hours = total_s / SECONDS_PER_HOUR;
    let minutes = (total_s % SECONDS_PER_HOUR) / 60;
    let secs = total_s % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}.{millis:03}")
    } else {
        format!("{minutes}:{secs:02}.{millis:03}")
    }
}

/// Gap to the race leader as shown in the results table.
///
/// * DNF results always read `DNF`.
/// * The leader (index 0) shows its absolute race time.
/// * Everyone else shows `+delta` with exactly three decimals.
pub fn format_gap(index: usize, time: f64, leader_time: f64, is_dnf: bool) -> String {
    if is_dnf {
        DNF_GAP.to_string()
    } else if index == 0 {
        format_time(time)
    } else {
        // same half-up millisecond rounding as format_time
        let delta_ms = ((time - leader_time) * MILLIS_PER_SECOND as f64).round();
        format!("+{:.3}", delta_ms / MILLIS_PER_SECOND as f64)
    }
}

pub fn format_points_delta(points: f64) -> String {
    if points > 0. {
        format!("+{points}")
    } else {
        String::new()
    }
}

pub fn format_tyre_degradation(tyre_degradation: f64) -> String {
    format!("{tyre_degradation}%")
}

pub fn team_color(team: &str) -> &'static str {
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_TEAM_COLOR)
}

/// Track temperature shown next to the weather label.
pub fn weather_temperature(weather: Option<&str>) -> &'static str {
    match weather {
        None | Some("") => "25°C",
        Some("Rain") => "18°C",
        Some("Cloudy") => "22°C",
        Some("Sunny") => "32°C",
        Some(_) => "26°C",
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TyreBand {
    Good,
    Warning,
    Critical,
}

impl TyreBand {
    pub fn from_degradation(tyre_degradation: f64) -> Self {
        if tyre_degradation < 40. {
            Self::Good
        } else if tyre_degradation < 70. {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#4caf50",
            Self::Warning => "#ffeb3b",
            Self::Critical => "#f44336",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}
