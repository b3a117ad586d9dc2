use std::path::Path;

use log::info;

use super::Season;
use crate::RaceboardError;

/// Loads a season from either a `data.js` script (`window.raceData = {...};`) or a plain JSON file.
pub fn load_season(source_file: &Path) -> Result<Season, RaceboardError> {
    if !source_file.exists() {
        return Err(RaceboardError::InvalidDatasetFile {
            path: format!("{:?}", source_file),
        });
    }

    let content = std::fs::read_to_string(source_file)
        .map_err(|e| RaceboardError::DatasetIOError { source: e })?;
    let season = parse_season(&content)?;

    info!(
        "Loaded {:?}, found {} races and {} standings entries",
        source_file,
        season.races.len(),
        season.standings.len()
    );
    Ok(season)
}

pub fn parse_season(content: &str) -> Result<Season, RaceboardError> {
    serde_json::from_str(strip_js_assignment(content))
        .map_err(|e| RaceboardError::DatasetParseError { source: e })
}

/// Returns the JSON payload of a `[var|let|const] a.b.c = {...};` script, or the input unchanged
/// when it does not look like one.
fn strip_js_assignment(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(body_start) = trimmed.find(['{', '[']) else {
        return trimmed;
    };

    let prefix = trimmed[..body_start].trim_end();
    let Some(target) = prefix.strip_suffix('=') else {
        return trimmed;
    };
    if !is_assignment_target(target.trim()) {
        return trimmed;
    }

    trimmed[body_start..].trim_end().trim_end_matches(';').trim_end()
}

fn is_assignment_target(target: &str) -> bool {
    let target = ["var ", "let ", "const "]
        .iter()
        .find_map(|kw| target.strip_prefix(*kw))
        .map(str::trim_start)
        .unwrap_or(target);

    !target.is_empty()
        && target.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
