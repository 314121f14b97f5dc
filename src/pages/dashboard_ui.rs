//! Dashboard page: quick-launch preset cards plus the open-windows overview.

use eframe::egui;

use crate::presets::Preset;
use crate::windows::{PlotWindowConfig, PlotWindowRegistry};

/// Render the dashboard. Returns `true` when a preset was edited and the set
/// needs re-persisting.
pub fn show(
    ui: &mut egui::Ui,
    presets: &mut [Preset],
    open_windows: &[String],
    windows: &mut PlotWindowRegistry,
    worker_running: bool,
) -> bool {
    let mut presets_changed = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Quick Launch");
            ui.weak(
                "Spin up preconfigured plot windows or curate your favourites for common workflows.",
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.label(format!(
                "Worker status: {}",
                if worker_running { "Connected" } else { "Unavailable" }
            ));
        });
    });
    ui.add_space(8.0);

    egui::Grid::new("preset_grid")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, preset) in presets.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.set_min_width(280.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(preset.icon).size(28.0));
                        ui.vertical(|ui| {
                            ui.strong(preset.title);
                            ui.weak(preset.description);
                        });
                    });
                    ui.horizontal(|ui| {
                        match preset.channels.len() {
                            0 => ui.weak("No channels selected yet"),
                            1 => ui.weak("1 channel"),
                            n => ui.weak(format!("{n} channels")),
                        };
                        ui.weak(format!("Scale: {}", preset.y_scale.label()));
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Open Window").clicked() {
                            windows.open(PlotWindowConfig::from_preset(preset));
                        }
                        if ui.button("Toggle Scale").clicked() {
                            preset.y_scale = preset.y_scale.toggled();
                            presets_changed = true;
                        }
                    });
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(12.0);
    ui.columns(2, |cols| {
        cols[0].group(|ui| {
            ui.strong("Open Plot Windows");
            ui.add_space(4.0);
            if open_windows.is_empty() {
                ui.label("No plot windows are currently open.");
            } else {
                for id in open_windows {
                    ui.label(format!("• {id}"));
                }
            }
        });
        cols[1].group(|ui| {
            ui.strong("Preset Tips");
            ui.add_space(4.0);
            ui.weak("Click \"Toggle Scale\" to switch between linear and logarithmic views.");
            ui.weak("Presets are saved locally and persist across sessions.");
            ui.weak("Future updates will let you edit channel lists directly.");
        });
    });

    presets_changed
}
