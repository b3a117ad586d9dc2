pub(crate) mod config;
mod race_view;
mod standings_view;

use std::path::PathBuf;

use config::AppConfig;
use egui::{Align, Color32, Frame, Layout, Margin, RichText};
use log::{error, info};

use raceboard::{DashboardController, View, season::load_season};

use super::{PALETTE_CYAN, PALETTE_MUTED, dashboard_visuals};

pub(crate) const DATASET_EXTENSIONS: [&str; 2] = ["js", "json"];

pub(crate) enum UiState {
    Error { message: String },
    Display { controller: Box<DashboardController> },
}

/// User interactions collected while drawing a frame and applied once the frame is laid out.
enum UiAction {
    SwitchView(View),
    PreviousRace,
    NextRace,
    OpenDataset(PathBuf),
}

/// `DashboardApp` shows a season dataset in a desktop window.
///
/// The app never formats data itself: it draws the [`raceboard::Screen`] owned by its
/// [`DashboardController`] and forwards clicks to the controller.
pub struct DashboardApp {
    ui_state: UiState,
    app_config: AppConfig,
    dataset_path: Option<PathBuf>,
}

impl DashboardApp {
    pub fn new(
        dataset_path: Option<PathBuf>,
        app_config: AppConfig,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());

        let mut app = Self {
            ui_state: UiState::Error {
                message: String::new(),
            },
            app_config,
            dataset_path: None,
        };
        app.load_dataset(dataset_path);
        app
    }

    fn load_dataset(&mut self, dataset_path: Option<PathBuf>) {
        let season = match dataset_path.as_deref().map(load_season).transpose() {
            Ok(season) => season,
            Err(e) => {
                error!("Could not load season data: {}", e);
                self.ui_state = UiState::Error {
                    message: format!("Could not load season data: {}", e),
                };
                self.dataset_path = None;
                return;
            }
        };

        // a reopened dataset picks up where the previous session left off
        let reopening = dataset_path.is_some() && dataset_path == self.app_config.last_dataset;
        self.ui_state = match season {
            Some(season) if reopening => {
                info!(
                    "Restoring race {} of {:?}",
                    self.app_config.last_race_index, dataset_path
                );
                UiState::Display {
                    controller: Box::new(DashboardController::with_state(
                        season,
                        self.app_config.last_race_index,
                        self.app_config.last_view,
                    )),
                }
            }
            season => match DashboardController::initialize(season) {
                Ok(controller) => UiState::Display {
                    controller: Box::new(controller),
                },
                Err(e) => UiState::Error {
                    message: e.to_string(),
                },
            },
        };
        self.dataset_path = dataset_path;
    }

    fn remember_position(&mut self) {
        if let UiState::Display { controller } = &self.ui_state {
            self.app_config.last_dataset = self.dataset_path.clone();
            self.app_config.last_race_index = controller.current_race_index();
            self.app_config.last_view = controller.active_view();
        }
    }

    fn apply(&mut self, action: UiAction) {
        if let UiAction::OpenDataset(path) = action {
            self.remember_position();
            self.load_dataset(Some(path));
            return;
        }

        let UiState::Display { controller } = &mut self.ui_state else {
            return;
        };
        match action {
            UiAction::SwitchView(view) => controller.switch_view(view),
            UiAction::PreviousRace => {
                controller.go_to_previous_race();
            }
            UiAction::NextRace => {
                controller.go_to_next_race();
            }
            UiAction::OpenDataset(_) => {}
        }
    }

    fn top_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            if let UiState::Display { controller } = &self.ui_state {
                for view in View::ALL {
                    if ui
                        .selectable_label(controller.active_view() == view, view.label())
                        .clicked()
                    {
                        actions.push(UiAction::SwitchView(view));
                    }
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("📂 Open dataset").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("Season data", &DATASET_EXTENSIONS)
                        .pick_file()
                {
                    actions.push(UiAction::OpenDataset(path));
                }
            });
        });

        if let UiState::Display { controller } = &self.ui_state {
            let header = &controller.screen().header;
            ui.add_space(6.);
            ui.heading(RichText::new(&header.title).color(Color32::WHITE).strong());
            ui.horizontal(|ui| {
                for field in [&header.round, &header.weather, &header.temperature, &header.timer] {
                    if !field.is_empty() {
                        ui.label(RichText::new(field).color(PALETTE_CYAN));
                        ui.separator();
                    }
                }
            });
        }
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.remember_position();
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("navigation")
            .frame(Frame::new().inner_margin(Margin::same(10)))
            .show(ctx, |ui| self.top_bar(ui, &mut actions));

        egui::CentralPanel::default().show(ctx, |ui| match &self.ui_state {
            UiState::Error { message } => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(message)
                            .color(Color32::from_rgb(255, 77, 77))
                            .heading(),
                    );
                });
            }
            UiState::Display { controller } => match controller.active_view() {
                View::Dashboard => Self::race_view(ui, controller, &mut actions),
                View::Standings => Self::standings_view(ui, controller),
            },
        });

        egui::TopBottomPanel::bottom("status")
            .frame(Frame::new().inner_margin(Margin::same(4)))
            .show(ctx, |ui| {
                let status = match (&self.ui_state, &self.dataset_path) {
                    (UiState::Display { controller }, Some(path)) => format!(
                        "{} · race {} of {}",
                        path.display(),
                        controller.current_race_index() + 1,
                        controller.race_count()
                    ),
                    _ => "No dataset loaded".to_string(),
                };
                ui.label(RichText::new(status).color(PALETTE_MUTED).small());
            });

        for action in actions {
            self.apply(action);
        }
    }
}
