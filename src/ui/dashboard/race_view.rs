use egui::{Align, Color32, Layout, RichText, Sense, Ui, Vec2};
use egui_extras::{Column, TableBuilder};

use raceboard::{
    DashboardController,
    dashboard::view_model::ResultRow,
    report::RESULT_COLUMNS,
};

use super::{DashboardApp, UiAction};
use crate::ui::{PALETTE_CYAN, PALETTE_MUTED, hex_color};

const ROW_HEIGHT: f32 = 24.;
const TEAM_BAR_SIZE: Vec2 = Vec2::new(4., 16.);

impl DashboardApp {
    pub(super) fn race_view(ui: &mut Ui, controller: &DashboardController, actions: &mut Vec<UiAction>) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            if ui
                .add_enabled(controller.has_previous_race(), egui::Button::new("◀ Prev"))
                .clicked()
            {
                actions.push(UiAction::PreviousRace);
            }
            if ui
                .add_enabled(controller.has_next_race(), egui::Button::new("Next ▶"))
                .clicked()
            {
                actions.push(UiAction::NextRace);
            }
        });
        ui.add_space(8.);

        TableBuilder::new(ui)
            .id_salt("race_results")
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(40.))
            .column(Column::initial(260.).at_least(160.).resizable(true))
            .columns(Column::auto().at_least(60.), RESULT_COLUMNS.len() - 2)
            .header(ROW_HEIGHT, |mut header| {
                for title in RESULT_COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row in &controller.screen().race_rows {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(RichText::new(row.position.to_string()).strong());
                        });
                        table_row.col(|ui| driver_cell(ui, row));
                        table_row.col(|ui| {
                            ui.label(RichText::new(&row.gap).color(hex_color(row.gap_tone.color())));
                        });
                        table_row.col(|ui| {
                            ui.label(RichText::new(&row.time).color(hex_color(row.time_color())));
                        });
                        table_row.col(|ui| {
                            ui.label(RichText::new(row.pits.to_string()).color(PALETTE_CYAN));
                        });
                        table_row.col(|ui| {
                            ui.label(
                                RichText::new(&row.tyre_degradation)
                                    .color(hex_color(row.tyre_band.color())),
                            );
                        });
                        table_row.col(|ui| {
                            ui.label(
                                RichText::new(row.overtakes.to_string())
                                    .color(Color32::WHITE)
                                    .strong(),
                            );
                        });
                        table_row.col(|ui| {
                            ui.label(row.points.as_str());
                        });
                    });
                }
            });
    }
}

fn driver_cell(ui: &mut Ui, row: &ResultRow) {
    let (bar, _) = ui.allocate_exact_size(TEAM_BAR_SIZE, Sense::hover());
    ui.painter().rect_filled(bar, 0., hex_color(row.team_color));

    let name = RichText::new(&row.name);
    ui.label(if row.is_dnf { name.color(PALETTE_MUTED) } else { name });
    ui.label(RichText::new(&row.team_label).color(PALETTE_MUTED).small());
}
