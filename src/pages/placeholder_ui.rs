//! Placeholder pages that only carry a heading and a short blurb.

use eframe::egui;

pub fn show(ui: &mut egui::Ui, title: &str, blurb: &str) {
    ui.heading(title);
    ui.add_space(4.0);
    ui.weak(blurb);
}
