// Dashboard controller: navigation state plus the season -> screen transform

use log::debug;

use crate::{RaceboardError, season::Season};

pub mod format;
pub mod view_model;

use format::{DEFAULT_WEATHER, weather_temperature};
use view_model::{ResultRow, Screen, StandingRow, View};

pub const STANDINGS_TITLE: &str = "Season Standings";
pub const STANDINGS_TIMER: &str = "COMPLETE";

/// `DashboardController` owns a season and the navigation state over it.
///
/// Every state change is followed by a synchronous re-render of the [`Screen`], so callers only
/// ever need to read [`DashboardController::screen`] after invoking an operation.
///
/// # Methods
///
/// * `initialize` - Creates a controller for a loaded season, failing if none was supplied.
/// * `switch_view` - Shows a single view and re-renders it.
/// * `go_to_previous_race` / `go_to_next_race` - Moves between races, clamped to the season.
#[derive(Debug, Clone)]
pub struct DashboardController {
    season: Season,
    current_race_index: usize,
    active_view: View,
    screen: Screen,
}

impl DashboardController {
    pub fn initialize(season: Option<Season>) -> Result<Self, RaceboardError> {
        let season = season.ok_or(RaceboardError::MissingDataset)?;
        let mut controller = Self {
            season,
            current_race_index: 0,
            active_view: View::Dashboard,
            screen: Screen::default(),
        };
        controller.render_dashboard();
        Ok(controller)
    }

    /// Restores a previously saved position. Out of range race indexes are clamped.
    pub fn with_state(season: Season, race_index: usize, view: View) -> Self {
        let last_index = season.races.len().saturating_sub(1);
        let mut controller = Self {
            season,
            current_race_index: race_index.min(last_index),
            active_view: View::Dashboard,
            screen: Screen::default(),
        };
        controller.render_dashboard();
        controller.switch_view(view);
        controller
    }

    pub fn season(&self) -> &Season {
        &self.season
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_race_index(&self) -> usize {
        self.current_race_index
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn race_count(&self) -> usize {
        self.season.races.len()
    }

    pub fn has_previous_race(&self) -> bool {
        self.current_race_index > 0
    }

    pub fn has_next_race(&self) -> bool {
        self.current_race_index + 1 < self.season.races.len()
    }

    pub fn switch_view(&mut self, view: View) {
        debug!("Switching to {} view", view.name());
        self.active_view = view;
        self.screen.active_view = view;

        match view {
            View::Standings => {
                self.render_standings();
                self.screen.header.title = STANDINGS_TITLE.to_string();
                self.screen.header.timer = STANDINGS_TIMER.to_string();
            }
            View::Dashboard => self.render_dashboard(),
        }
    }

    pub fn switch_view_named(&mut self, name: &str) -> Result<(), RaceboardError> {
        let view = View::from_name(name).ok_or_else(|| RaceboardError::UnknownView {
            name: name.to_string(),
        })?;
        self.switch_view(view);
        Ok(())
    }

    /// Returns `false` without touching the screen when already at the first race.
    pub fn go_to_previous_race(&mut self) -> bool {
        if !self.has_previous_race() {
            return false;
        }
        self.current_race_index -= 1;
        debug!("Moved to race index {}", self.current_race_index);
        self.render_dashboard();
        true
    }

    /// Returns `false` without touching the screen when already at the last race.
    pub fn go_to_next_race(&mut self) -> bool {
        if !self.has_next_race() {
            return false;
        }
        self.current_race_index += 1;
        debug!("Moved to race index {}", self.current_race_index);
        self.render_dashboard();
        true
    }

    fn render_dashboard(&mut self) {
        let Some(race) = self.season.races.get(self.current_race_index) else {
            return;
        };

        let header = &mut self.screen.header;
        header.title = format!("{} Grand Prix", race.track_name);
        header.round = format!("Round {}", race.race_id);
        header.weather = race.weather().unwrap_or(DEFAULT_WEATHER).to_string();
        header.temperature = weather_temperature(race.weather()).to_string();

        // results[0] is the leader whatever its position field says
        let leader_time = race.leader().map(|r| r.time).unwrap_or_default();
        self.screen.race_rows = race
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| ResultRow::from_result(index, result, leader_time))
            .collect();
    }

    fn render_standings(&mut self) {
        self.screen.standing_rows = self.season.standings.iter().map(StandingRow::from).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::view_model::GapTone;
    use crate::season::{Race, RaceResult, StandingEntry};

    fn result(position: i64, name: &str, team: &str, time: f64, status: Option<&str>) -> RaceResult {
        RaceResult {
            position,
            name: name.to_string(),
            team: team.to_string(),
            time,
            status: status.map(str::to_string),
            pits: 1,
            tyre_degradation: 55.,
            overtakes: None,
            points: 0.,
        }
    }

    fn test_season() -> Season {
        Season {
            races: vec![
                Race {
                    race_id: 1,
                    track_name: "Bahrain".to_string(),
                    weather: None,
                    results: vec![
                        result(1, "Max Verstappen", "Red Bull", 90., None),
                        result(2, "Lando Norris", "McLaren", 92.5, None),
                        result(3, "Esteban Ocon", "Haas", 0., Some("DNF")),
                    ],
                },
                Race {
                    race_id: 2,
                    track_name: "Jeddah".to_string(),
                    weather: Some("Cloudy".to_string()),
                    results: vec![result(1, "Charles Leclerc", "Ferrari", 5000.25, None)],
                },
                Race {
                    race_id: 3,
                    track_name: "Melbourne".to_string(),
                    weather: Some("Rain".to_string()),
                    results: vec![],
                },
            ],
            standings: vec![
                StandingEntry {
                    rank: 1,
                    name: "Max Verstappen".to_string(),
                    team: "Red Bull".to_string(),
                    points: 25.,
                    total_time: 5090.,
                },
                StandingEntry {
                    rank: 2,
                    name: "Unknown Driver".to_string(),
                    team: "Privateer".to_string(),
                    points: 18.,
                    total_time: 92.5,
                },
            ],
        }
    }

    #[test]
    fn test_initialize_without_dataset_fails() {
        match DashboardController::initialize(None) {
            Err(RaceboardError::MissingDataset) => {}
            _ => panic!("Expected MissingDataset error"),
        }
    }

    #[test]
    fn test_initialize_renders_first_race() {
        let controller = DashboardController::initialize(Some(test_season())).unwrap();
        assert_eq!(controller.current_race_index(), 0);
        assert_eq!(controller.active_view(), View::Dashboard);

        let header = &controller.screen().header;
        assert_eq!(header.title, "Bahrain Grand Prix");
        assert_eq!(header.round, "Round 1");
        assert_eq!(header.weather, "Sunny");
        assert_eq!(header.temperature, "25°C");
        assert_eq!(controller.screen().race_rows.len(), 3);
    }

    #[test]
    fn test_gap_strings_end_to_end() {
        let controller = DashboardController::initialize(Some(test_season())).unwrap();
        let gaps: Vec<&str> = controller
            .screen()
            .race_rows
            .iter()
            .map(|r| r.gap.as_str())
            .collect();
        assert_eq!(gaps, vec!["1:30.000", "+2.500", "DNF"]);

        let rows = &controller.screen().race_rows;
        assert_eq!(rows[0].gap_tone, GapTone::Leader);
        assert_eq!(rows[1].gap_tone, GapTone::Behind);
        assert_eq!(rows[2].gap_tone, GapTone::Dnf);
        // time is still shown for retirements
        assert_eq!(rows[2].time, "0:00.000");
        assert_eq!(rows[2].css_classes(), "pos-3 dnf-row");
        assert_eq!(rows[1].team_label, "MCLAREN");
        assert_eq!(rows[1].overtakes, 0);
        assert_eq!(rows[1].points, "");
    }

    #[test]
    fn test_first_result_is_leader_regardless_of_position() {
        let season = Season {
            races: vec![Race {
                race_id: 9,
                track_name: "Zandvoort".to_string(),
                weather: None,
                results: vec![
                    result(3, "Pierre Gasly", "Alpine", 95., None),
                    result(1, "Lando Norris", "McLaren", 90., None),
                ],
            }],
            standings: vec![],
        };
        let controller = DashboardController::initialize(Some(season)).unwrap();
        let rows = &controller.screen().race_rows;

        assert_eq!(rows[0].position, 3);
        assert_eq!(rows[0].gap, "1:35.000");
        assert_eq!(rows[0].gap_tone, GapTone::Leader);
        // measured against results[0], so a faster car reads negative
        assert_eq!(rows[1].gap, "+-5.000");
        assert_eq!(rows[1].gap_tone, GapTone::Behind);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut controller = DashboardController::initialize(Some(test_season())).unwrap();
        assert!(!controller.go_to_previous_race());
        assert_eq!(controller.current_race_index(), 0);

        assert!(controller.go_to_next_race());
        assert_eq!(controller.screen().header.title, "Jeddah Grand Prix");
        assert_eq!(controller.screen().header.weather, "Cloudy");
        assert_eq!(controller.screen().header.temperature, "22°C");
        assert_eq!(controller.screen().race_rows[0].gap, "1:23:20.250");

        assert!(controller.go_to_next_race());
        assert!(!controller.go_to_next_race());
        assert_eq!(controller.current_race_index(), 2);
        assert!(controller.screen().race_rows.is_empty());

        assert!(controller.go_to_previous_race());
        assert_eq!(controller.current_race_index(), 1);
    }

    #[test]
    fn test_empty_season_renders_nothing() {
        let mut controller = DashboardController::initialize(Some(Season::default())).unwrap();
        assert_eq!(controller.screen().header.title, "");
        assert!(!controller.go_to_next_race());
        assert!(!controller.go_to_previous_race());
        assert_eq!(controller.current_race_index(), 0);
    }

    #[test]
    fn test_switch_to_standings() {
        let mut controller = DashboardController::initialize(Some(test_season())).unwrap();
        controller.switch_view(View::Standings);

        let screen = controller.screen();
        assert!(screen.is_visible(View::Standings));
        assert!(!screen.is_visible(View::Dashboard));
        assert_eq!(screen.header.title, STANDINGS_TITLE);
        assert_eq!(screen.header.timer, STANDINGS_TIMER);
        assert_eq!(screen.standing_rows.len(), 2);
        assert_eq!(screen.standing_rows[0].team_color, "#3671C6");
        assert_eq!(screen.standing_rows[0].total_time, "1:24:50.000");
        assert_eq!(screen.standing_rows[1].team_color, "#FFFFFF");
        assert_eq!(screen.standing_rows[1].points, "18");

        controller.switch_view(View::Dashboard);
        assert!(controller.screen().is_visible(View::Dashboard));
        assert_eq!(controller.screen().header.title, "Bahrain Grand Prix");
    }

    #[test]
    fn test_switch_view_by_name() {
        let mut controller = DashboardController::initialize(Some(test_season())).unwrap();
        controller.switch_view_named("standings").unwrap();
        assert_eq!(controller.active_view(), View::Standings);

        match controller.switch_view_named("telemetry") {
            Err(RaceboardError::UnknownView { name }) => assert_eq!(name, "telemetry"),
            _ => panic!("Expected UnknownView error"),
        }
        assert_eq!(controller.active_view(), View::Standings);
    }

    #[test]
    fn test_with_state_clamps_index() {
        let controller = DashboardController::with_state(test_season(), 42, View::Standings);
        assert_eq!(controller.current_race_index(), 2);
        assert_eq!(controller.active_view(), View::Standings);
        assert_eq!(controller.screen().header.round, "Round 3");
        assert_eq!(controller.screen().header.title, STANDINGS_TITLE);
    }
}
