//! Static HTML export
//!
//! Produces a single self-contained page with every race of the season and the final standings.
//! Navigation between races and tabs works offline through a small inline script.

use itertools::Itertools;

use crate::{
    RaceboardError,
    dashboard::{
        DashboardController,
        view_model::{Header, ResultRow, StandingRow, View},
    },
    season::Season,
};

use super::{RESULT_COLUMNS, STANDING_COLUMNS};

/// Render a whole season as an HTML page
pub fn render_html_season(season: &Season) -> Result<String, RaceboardError> {
    let mut controller = DashboardController::initialize(Some(season.clone()))?;

    let mut race_sections = Vec::with_capacity(controller.race_count());
    if controller.race_count() > 0 {
        loop {
            let screen = controller.screen();
            race_sections.push(render_race_section(
                controller.current_race_index(),
                &screen.header,
                &screen.race_rows,
            ));
            if !controller.go_to_next_race() {
                break;
            }
        }
    }

    controller.switch_view(View::Standings);
    let standings = render_standings_section(&controller.screen().standing_rows);

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Raceboard</title>
    <style>{css}</style>
</head>
<body>
    <nav>
        <a href="#" class="nav-item active" data-view="dashboard">Dashboard</a>
        <a href="#" class="nav-item" data-view="standings">Standings</a>
    </nav>
    <div id="view-dashboard">
        <div class="race-controls">
            <button id="prev-race">&lt;</button>
            <button id="next-race">&gt;</button>
        </div>
        {races}
    </div>
    <div id="view-standings" style="display: none">
        {standings}
    </div>
    <script>{js}</script>
</body>
</html>"##,
        css = inline_css(),
        js = inline_javascript(),
        races = race_sections.join("\n"),
    ))
}

fn render_race_section(index: usize, header: &Header, rows: &[ResultRow]) -> String {
    let display = if index == 0 { "block" } else { "none" };
    let body = rows.iter().map(render_result_row).join("\n");

    format!(
        r#"<section class="race" data-index="{index}" style="display: {display}">
    <h1>{title}</h1>
    <div class="race-meta"><span>{round}</span><span>{weather}</span><span>{temperature}</span></div>
    <table>
        <thead><tr>{columns}</tr></thead>
        <tbody>
{body}
        </tbody>
    </table>
</section>"#,
        title = escape_html(&header.title),
        round = escape_html(&header.round),
        weather = escape_html(&header.weather),
        temperature = escape_html(&header.temperature),
        columns = header_cells(&RESULT_COLUMNS),
    )
}

fn render_result_row(row: &ResultRow) -> String {
    format!(
        r#"<tr class="{classes}">
    <td><div class="pos-badge">{position}</div></td>
    <td style="border-left: 4px solid {team_color}; padding-left: 10px;">{name} <span class="team">{team}</span></td>
    <td style="color: {gap_color}">{gap}</td>
    <td style="color: {time_color}">{time}</td>
    <td class="accent">{pits}</td>
    <td><span class="tyre-{band}" style="color: {band_color}">{tyre}</span></td>
    <td class="overtakes">{overtakes}</td>
    <td>{points}</td>
</tr>"#,
        classes = row.css_classes(),
        position = row.position,
        team_color = row.team_color,
        name = escape_html(&row.name),
        team = escape_html(&row.team_label),
        gap_color = row.gap_tone.color(),
        gap = escape_html(&row.gap),
        time_color = row.time_color(),
        time = escape_html(&row.time),
        pits = row.pits,
        band = row.tyre_band.css_class(),
        band_color = row.tyre_band.color(),
        tyre = escape_html(&row.tyre_degradation),
        overtakes = row.overtakes,
        points = escape_html(&row.points),
    )
}

fn render_standings_section(rows: &[StandingRow]) -> String {
    let body = rows
        .iter()
        .map(|row| {
            format!(
                r#"<tr>
    <td><div class="pos-badge outline">{rank}</div></td>
    <td><span class="team-bar" style="background-color: {team_color}"></span>{name}</td>
    <td>{team}</td>
    <td class="accent">{points}</td>
    <td>{time}</td>
</tr>"#,
                rank = row.rank,
                team_color = row.team_color,
                name = escape_html(&row.name),
                team = escape_html(&row.team),
                points = escape_html(&row.points),
                time = escape_html(&row.total_time),
            )
        })
        .join("\n");

    format!(
        r#"<h1>{title}</h1>
<table>
    <thead><tr>{columns}</tr></thead>
    <tbody>
{body}
    </tbody>
</table>"#,
        title = crate::dashboard::STANDINGS_TITLE,
        columns = header_cells(&STANDING_COLUMNS),
    )
}

fn header_cells(columns: &[&str]) -> String {
    columns.iter().map(|c| format!("<th>{c}</th>")).join("")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
:root { --accent: #66fcf1; }
body { background: #0b0c10; color: #c5c6c7; font-family: sans-serif; margin: 0; padding: 20px; }
nav { margin-bottom: 16px; }
.nav-item { color: #c5c6c7; margin-right: 16px; text-decoration: none; }
.nav-item.active { color: var(--accent); font-weight: bold; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #1f2833; }
.pos-badge { display: inline-block; min-width: 24px; text-align: center; background: #1f2833; border-radius: 4px; }
.pos-badge.outline { background: transparent; border: 1px solid #333; }
.team { color: #666; font-size: 12px; margin-left: 5px; }
.team-bar { display: inline-block; width: 4px; height: 14px; margin-right: 8px; }
.accent { color: var(--accent); font-weight: bold; }
.overtakes { color: #fff; font-weight: bold; }
.dnf-row { opacity: 0.7; }
.race-meta span { margin-right: 16px; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    var races = document.querySelectorAll('section.race');
    var current = 0;
    function showRace(index) {
        if (index < 0 || index >= races.length) return;
        races[current].style.display = 'none';
        current = index;
        races[current].style.display = 'block';
    }
    document.getElementById('prev-race').addEventListener('click', function () { showRace(current - 1); });
    document.getElementById('next-race').addEventListener('click', function () { showRace(current + 1); });
    var navItems = document.querySelectorAll('.nav-item');
    navItems.forEach(function (item) {
        item.addEventListener('click', function (e) {
            e.preventDefault();
            ['dashboard', 'standings'].forEach(function (v) {
                document.getElementById('view-' + v).style.display = v === item.dataset.view ? 'block' : 'none';
            });
            navItems.forEach(function (n) { n.classList.remove('active'); });
            item.classList.add('active');
        });
    });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{Race, RaceResult, StandingEntry};

    fn race(race_id: i64, track: &str, driver: &str) -> Race {
        Race {
            race_id,
            track_name: track.to_string(),
            weather: None,
            results: vec![RaceResult {
                position: 1,
                name: driver.to_string(),
                team: "Ferrari".to_string(),
                time: 90.,
                points: 25.,
                tyre_degradation: 75.,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_html_contains_every_race_and_standings() {
        let season = Season {
            races: vec![race(1, "Suzuka", "A"), race(2, "Austin", "B <C>")],
            standings: vec![StandingEntry {
                rank: 1,
                name: "A".to_string(),
                team: "Ferrari".to_string(),
                points: 25.,
                total_time: 90.,
            }],
        };
        let html = render_html_season(&season).unwrap();

        assert!(html.contains("Suzuka Grand Prix"));
        assert!(html.contains("Austin Grand Prix"));
        assert!(html.contains(r#"data-index="1" style="display: none""#));
        assert!(html.contains("B &lt;C&gt;"));
        assert!(html.contains("#E80020"));
        assert!(html.contains(r#"class="tyre-critical""#));
        assert!(html.contains("Season Standings"));
        assert_eq!(html.matches("<section class=\"race\"").count(), 2);
    }

    #[test]
    fn test_empty_season_still_renders_page() {
        let html = render_html_season(&Season::default()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert_eq!(html.matches("<section class=\"race\"").count(), 0);
    }
}
