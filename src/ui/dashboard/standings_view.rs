use egui::{Align, Layout, RichText, Sense, Ui, Vec2};
use egui_extras::{Column, TableBuilder};

use raceboard::{DashboardController, report::STANDING_COLUMNS};

use super::DashboardApp;
use crate::ui::{PALETTE_CYAN, hex_color};

const ROW_HEIGHT: f32 = 24.;

impl DashboardApp {
    pub(super) fn standings_view(ui: &mut Ui, controller: &DashboardController) {
        TableBuilder::new(ui)
            .id_salt("season_standings")
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(48.))
            .column(Column::initial(240.).at_least(160.).resizable(true))
            .column(Column::initial(160.).resizable(true))
            .columns(Column::auto().at_least(80.), 2)
            .header(ROW_HEIGHT, |mut header| {
                for title in STANDING_COLUMNS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row in &controller.screen().standing_rows {
                    body.row(ROW_HEIGHT, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(row.rank.to_string());
                        });
                        table_row.col(|ui| {
                            let (bar, _) = ui.allocate_exact_size(Vec2::new(4., 16.), Sense::hover());
                            ui.painter().rect_filled(bar, 0., hex_color(row.team_color));
                            ui.label(row.name.as_str());
                        });
                        table_row.col(|ui| {
                            ui.label(row.team.as_str());
                        });
                        table_row.col(|ui| {
                            ui.label(RichText::new(&row.points).color(PALETTE_CYAN).strong());
                        });
                        table_row.col(|ui| {
                            ui.label(row.total_time.as_str());
                        });
                    });
                }
            });
    }
}
