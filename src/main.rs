mod ui;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::error;
use raceboard::{
    DashboardController, RaceboardError, View,
    report::{render_controller_text, render_json},
    season::load_season, writer,
};
use ui::dashboard::{DashboardApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the season dashboard in a desktop window
    View {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print a race or the standings as a text table
    Print {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = View::Dashboard)]
        view: View,

        /// 1-based race number, clamped to the season
        #[arg(short, long, default_value_t = 1)]
        race: usize,

        /// Dump the whole rendered screen as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Export the whole season as a static HTML page
    Export {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
}

fn view(input: Option<PathBuf>) -> Result<(), RaceboardError> {
    let app_config = AppConfig::from_local_file().unwrap_or_default();
    let dataset_path = input.or_else(|| app_config.last_dataset.clone());

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("Raceboard")
        .with_inner_size(app_config.window_size.clone());

    app_exit_status(eframe::run_native(
        "Raceboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(dataset_path, app_config, cc)))),
    ))
}

fn app_exit_status(result: eframe::Result) -> Result<(), RaceboardError> {
    result.map_err(|e| {
        error!("Could not start app: {}", e);
        RaceboardError::AppStartError { source: e }
    })
}

fn print(input: &Path, view: View, race: usize, json: bool) -> Result<(), RaceboardError> {
    let mut controller = DashboardController::initialize(Some(load_season(input)?))?;
    for _ in 1..race {
        if !controller.go_to_next_race() {
            break;
        }
    }
    controller.switch_view(view);
    if json {
        println!("{}", render_json(controller.screen())?);
    } else {
        print!("{}", render_controller_text(&controller));
    }
    Ok(())
}

fn export(input: &Path, output: &Path) -> Result<(), RaceboardError> {
    let season = load_season(input)?;
    writer::write_report(output, &season)
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    }) {
        error!("Could not set Ctrl-C handler: {}", e);
    }

    let result = match &cli.command {
        Commands::View { input } => view(input.clone()),
        Commands::Print {
            input,
            view,
            race,
            json,
        } => print(input, *view, *race, *json),
        Commands::Export { input, output } => export(input, output),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_start_failure_is_an_error() {
        let failure = eframe::Error::AppCreation(Box::new(std::io::Error::other("no display")));
        match app_exit_status(Err(failure)) {
            Err(RaceboardError::AppStartError { source }) => {
                assert!(source.to_string().contains("no display"));
            }
            _ => panic!("Expected AppStartError"),
        }
        assert!(app_exit_status(Ok(())).is_ok());
    }
}
