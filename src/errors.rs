// Error types for raceboard

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum RaceboardError {
    // Errors while bootstrapping the dashboard
    #[snafu(display("No data found! Run build.bat to generate data.js"))]
    MissingDataset,
    #[snafu(display("Unknown view: {name}"))]
    UnknownView { name: String },

    // Errors for the season loader
    #[snafu(display("Invalid season data file: {path}"))]
    InvalidDatasetFile { path: String },
    #[snafu(display("Error reading season data file"))]
    DatasetIOError { source: io::Error },
    #[snafu(display("Error parsing season data: {source}"))]
    DatasetParseError { source: serde_json::Error },

    // Desktop app errors
    #[snafu(display("Could not start app: {source}"))]
    AppStartError { source: eframe::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Report export errors
    #[snafu(display("Error serializing dashboard screen"))]
    ScreenSerializeError { source: serde_json::Error },
    #[snafu(display("Error writing report file"))]
    ReportWriteError { source: io::Error },
}
