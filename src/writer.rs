use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{RaceboardError, report::render_html_season, season::Season};

pub fn write_report(file: &Path, season: &Season) -> Result<(), RaceboardError> {
    let html = render_html_season(season)?;

    let report_file =
        File::create(file).map_err(|e| RaceboardError::ReportWriteError { source: e })?;
    let mut report_writer = BufWriter::new(report_file);
    report_writer
        .write_all(html.as_bytes())
        .map_err(|e| RaceboardError::ReportWriteError { source: e })?;
    report_writer
        .flush()
        .map_err(|e| RaceboardError::ReportWriteError { source: e })?;

    info!(
        "Exported {} races to {:?}",
        season.races.len(),
        file
    );
    Ok(())
}
