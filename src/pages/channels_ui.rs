//! Channel setup page: map raw telemetry channels to standard categories.

use eframe::egui;
use log::warn;

use crate::assignment::AssignmentModel;
use crate::catalog::CATALOG;

pub fn show(ui: &mut egui::Ui, model: &mut AssignmentModel) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Channel Setup");
            ui.weak(
                "Map incoming telemetry channel names to standardized signal categories so \
                 downstream visualizations and alerts can operate on consistent data types.",
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("Reset Suggestions").clicked() {
                model.reset_all();
            }
            ui.label(format!(
                "{} of {} channels assigned",
                model.assigned_count(),
                model.assignments().len()
            ));
        });
    });
    ui.add_space(6.0);

    let pending = model.pending_channels().count();
    if pending > 0 {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            format!(
                "{pending} channel{} still need a mapping.",
                if pending == 1 { "" } else { "s" }
            ),
        );
        ui.add_space(6.0);
    }

    ui.separator();

    // Snapshot the rows so edits can be applied through the model while the
    // table renders.
    let rows: Vec<_> = model.assignments().to_vec();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("channel_table")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Telemetry Channel");
                ui.strong("Standard Mapping");
                ui.strong("Units");
                ui.end_row();

                for row in &rows {
                    let channel_id = row.channel.id;
                    let category = row.category_id.and_then(|id| CATALOG.category(id));

                    ui.vertical(|ui| {
                        ui.label(row.channel.name);
                        ui.weak(channel_id);
                    });

                    ui.vertical(|ui| {
                        let selected = category.map(|c| c.label).unwrap_or("Unassigned");
                        egui::ComboBox::from_id_salt(("category", channel_id))
                            .selected_text(selected)
                            .show_ui(ui, |ui| {
                                if ui
                                    .selectable_label(category.is_none(), "Unassigned")
                                    .clicked()
                                {
                                    apply(model.set_category(channel_id, None));
                                }
                                for cat in CATALOG.categories() {
                                    let is_current = row.category_id == Some(cat.id);
                                    if ui.selectable_label(is_current, cat.label).clicked() {
                                        apply(model.set_category(channel_id, Some(cat.id)));
                                    }
                                }
                            });
                        if let Some(cat) = category.filter(|c| c.supports_secondary) {
                            ui.add_space(2.0);
                            ui.weak("Secondary mapping");
                            let options = CATALOG.secondary_options(cat.id);
                            let selected = row
                                .secondary_id
                                .as_deref()
                                .and_then(|id| options.iter().find(|o| o.id == id))
                                .map(|o| o.label)
                                .unwrap_or("None");
                            egui::ComboBox::from_id_salt(("secondary", channel_id))
                                .selected_text(selected)
                                .show_ui(ui, |ui| {
                                    if ui
                                        .selectable_label(row.secondary_id.is_none(), "None")
                                        .clicked()
                                    {
                                        apply(model.set_secondary(channel_id, ""));
                                    }
                                    for opt in options {
                                        let is_current =
                                            row.secondary_id.as_deref() == Some(opt.id);
                                        if ui.selectable_label(is_current, opt.label).clicked() {
                                            apply(model.set_secondary(channel_id, opt.id));
                                        }
                                    }
                                });
                        }
                    });

                    match category {
                        Some(cat) => {
                            let selected = row.unit.as_deref().unwrap_or(cat.default_unit());
                            egui::ComboBox::from_id_salt(("unit", channel_id))
                                .selected_text(selected)
                                .show_ui(ui, |ui| {
                                    for unit in cat.units {
                                        let is_current = row.unit.as_deref() == Some(*unit);
                                        if ui.selectable_label(is_current, *unit).clicked() {
                                            apply(model.set_unit(channel_id, unit));
                                        }
                                    }
                                });
                        }
                        None => {
                            ui.weak("N/A");
                        }
                    }

                    ui.end_row();
                }
            });
    });

    ui.add_space(8.0);
    ui.weak(
        "Once mappings are finalized, they can be synchronized with the worker service so every \
         plot window and automated alert references the same standardized channel identifiers.",
    );
}

/// Assignment edits can only fail for an unknown channel id, which the fixed
/// catalog rules out; log instead of surfacing.
fn apply(result: Result<(), crate::error::ShellError>) {
    if let Err(err) = result {
        warn!("assignment edit rejected: {err}");
    }
}
