// Text and static HTML renderers for the dashboard view model

use itertools::Itertools;

use crate::{
    RaceboardError,
    dashboard::{
        DashboardController,
        view_model::{ResultRow, Screen, StandingRow, View},
    },
};

mod html;

pub use html::render_html_season;

pub const RESULT_COLUMNS: [&str; 8] = ["POS", "DRIVER", "GAP", "TIME", "PITS", "TYRE", "OVT", "PTS"];
pub const STANDING_COLUMNS: [&str; 5] = ["RANK", "DRIVER", "TEAM", "PTS", "TIME"];

pub(crate) fn result_cells(row: &ResultRow) -> Vec<String> {
    vec![
        row.position.to_string(),
        format!("{} ({})", row.name, row.team_label),
        row.gap.clone(),
        row.time.clone(),
        row.pits.to_string(),
        row.tyre_degradation.clone(),
        row.overtakes.to_string(),
        row.points.clone(),
    ]
}

pub(crate) fn standing_cells(row: &StandingRow) -> Vec<String> {
    vec![
        row.rank.to_string(),
        row.name.clone(),
        row.team.clone(),
        row.points.clone(),
        row.total_time.clone(),
    ]
}

/// Renders the visible part of a screen as aligned plain text.
pub fn render_text(screen: &Screen) -> String {
    let header = &screen.header;
    let mut lines = vec![header.title.clone()];

    match screen.active_view {
        View::Dashboard => {
            lines.push(
                [
                    header.round.as_str(),
                    header.weather.as_str(),
                    header.temperature.as_str(),
                ]
                .iter()
                .filter(|f| !f.is_empty())
                .join(" | "),
            );
            lines.push(String::new());
            lines.extend(text_table(
                &RESULT_COLUMNS,
                screen.race_rows.iter().map(result_cells).collect(),
            ));
        }
        View::Standings => {
            lines.push(header.timer.clone());
            lines.push(String::new());
            lines.extend(text_table(
                &STANDING_COLUMNS,
                screen.standing_rows.iter().map(standing_cells).collect(),
            ));
        }
    }

    lines.join("\n") + "\n"
}

/// Renders the controller's current screen, see [`render_text`].
pub fn render_controller_text(controller: &DashboardController) -> String {
    render_text(controller.screen())
}

/// Dumps the whole screen, both tables and the header, as pretty JSON.
pub fn render_json(screen: &Screen) -> Result<String, RaceboardError> {
    serde_json::to_string_pretty(screen)
        .map_err(|e| RaceboardError::ScreenSerializeError { source: e })
}

fn text_table(columns: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let format_line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .join("  ")
            .trim_end()
            .to_string()
    };

    std::iter::once(format_line(columns.to_vec()))
        .chain(
            rows.iter()
                .map(|r| format_line(r.iter().map(String::as_str).collect())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{Race, RaceResult, Season, StandingEntry};

    fn season() -> Season {
        Season {
            races: vec![Race {
                race_id: 7,
                track_name: "Imola".to_string(),
                weather: Some("Rain".to_string()),
                results: vec![
                    RaceResult {
                        position: 1,
                        name: "Oscar Piastri".to_string(),
                        team: "McLaren".to_string(),
                        time: 5412.75,
                        pits: 2,
                        tyre_degradation: 38.,
                        overtakes: Some(4),
                        points: 25.,
                        ..Default::default()
                    },
                    RaceResult {
                        position: 2,
                        name: "George Russell".to_string(),
                        team: "Mercedes".to_string(),
                        time: 5420.,
                        status: Some("DNF".to_string()),
                        pits: 1,
                        tyre_degradation: 80.,
                        ..Default::default()
                    },
                ],
            }],
            standings: vec![StandingEntry {
                rank: 1,
                name: "Oscar Piastri".to_string(),
                team: "McLaren".to_string(),
                points: 25.,
                total_time: 5412.75,
            }],
        }
    }

    #[test]
    fn test_render_dashboard_text() {
        let controller = DashboardController::initialize(Some(season())).unwrap();
        let text = render_controller_text(&controller);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Imola Grand Prix");
        assert_eq!(lines[1], "Round 7 | Rain | 18°C");
        assert!(lines[3].starts_with("POS"));
        assert!(lines[4].contains("Oscar Piastri (MCLAREN)"));
        assert!(lines[4].contains("1:30:12.750"));
        assert!(lines[4].ends_with("+25"));
        assert!(lines[5].contains("DNF"));
    }

    #[test]
    fn test_render_standings_text() {
        let mut controller = DashboardController::initialize(Some(season())).unwrap();
        controller.switch_view(View::Standings);
        let text = render_controller_text(&controller);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Season Standings");
        assert_eq!(lines[1], "COMPLETE");
        assert!(lines[3].starts_with("RANK"));
        assert!(lines[4].starts_with("1"));
        assert!(lines[4].ends_with("1:30:12.750"));
    }

    #[test]
    fn test_render_json_dump() {
        let mut controller = DashboardController::initialize(Some(season())).unwrap();
        controller.switch_view(View::Standings);
        let json: serde_json::Value =
            serde_json::from_str(&render_json(controller.screen()).unwrap()).unwrap();

        assert_eq!(json["active_view"], "standings");
        assert_eq!(json["header"]["title"], "Season Standings");
        assert_eq!(json["header"]["round"], "Round 7");
        assert_eq!(json["race_rows"][0]["gap_tone"], "Leader");
        assert_eq!(json["race_rows"][1]["gap"], "DNF");
        assert_eq!(json["race_rows"][1]["tyre_band"], "Critical");
        assert_eq!(json["standing_rows"][0]["team_color"], "#FF8000");
    }

    #[test]
    fn test_columns_are_aligned() {
        let controller = DashboardController::initialize(Some(season())).unwrap();
        let text = render_text(controller.screen());
        let table: Vec<&str> = text.lines().skip(3).collect();
        let gap_offset = table[0].find("GAP").unwrap();
        assert_eq!(&table[2][gap_offset..gap_offset + 3], "DNF");
    }
}
