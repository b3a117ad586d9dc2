use egui::{Color32, Visuals, style::Widgets};
use log::debug;

pub(crate) mod dashboard;

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(11, 12, 16);
pub(crate) const PALETTE_NAVY: Color32 = Color32::from_rgb(31, 40, 51);
pub(crate) const PALETTE_SILVER: Color32 = Color32::from_rgb(197, 198, 199);
pub(crate) const PALETTE_CYAN: Color32 = Color32::from_rgb(102, 252, 241);
pub(crate) const PALETTE_MUTED: Color32 = Color32::from_rgb(102, 102, 102);

pub(crate) fn dashboard_visuals() -> Visuals {
    Visuals {
        dark_mode: true,
        hyperlink_color: PALETTE_CYAN,
        faint_bg_color: PALETTE_NAVY,
        extreme_bg_color: PALETTE_NAVY,
        panel_fill: PALETTE_BLACK,
        window_fill: PALETTE_BLACK,
        override_text_color: Some(PALETTE_SILVER),
        widgets: Widgets::dark(),
        striped: true,
        ..Default::default()
    }
}

/// Converts a `#RRGGBB` colour from the view model, falling back to white.
pub(crate) fn hex_color(hex: &str) -> Color32 {
    Color32::from_hex(hex)
        .map_err(|e| debug!("Could not parse colour {}: {:?}", hex, e))
        .unwrap_or(Color32::WHITE)
}
