//! Plot-window body: the settings side panel and the chart itself.
//!
//! All edits go through [`PlotModel`] operations; the chart is redrawn from a
//! freshly derived [`PlotDescriptor`] every frame, so the rendering below is
//! a pure consumer of that description.

use std::collections::HashMap;

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};

use crate::plotcfg::{
    derive, AxisScale, Bound, PlotDescriptor, PlotModel,
};

/// Per-window UI scratch: settings visibility and the raw text buffers behind
/// the range fields. Buffers let malformed input revert on commit instead of
/// being stored.
pub struct PlotPageState {
    pub show_settings: bool,
    x_min: String,
    x_max: String,
    /// channel id -> (min buffer, max buffer)
    channel_ranges: HashMap<String, (String, String)>,
}

fn fmt_bound(value: Option<f64>) -> String {
    value.map(|v| format!("{v}")).unwrap_or_default()
}

impl PlotPageState {
    pub fn from_model(model: &PlotModel) -> Self {
        Self {
            show_settings: false,
            x_min: fmt_bound(model.settings.x_range.min),
            x_max: fmt_bound(model.settings.x_range.max),
            channel_ranges: model
                .settings
                .channels
                .iter()
                .map(|c| {
                    (
                        c.id.clone(),
                        (fmt_bound(c.range.min), fmt_bound(c.range.max)),
                    )
                })
                .collect(),
        }
    }
}

/// A single range-bound text field. The edit is committed when the field
/// loses focus; `commit` applies it and returns the bound now in effect,
/// which the buffer is reset to (reverting rejected input).
fn range_field(
    ui: &mut egui::Ui,
    buffer: &mut String,
    commit: impl FnOnce(&str) -> Option<f64>,
) {
    let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(56.0));
    if response.lost_focus() {
        let value = commit(buffer);
        *buffer = fmt_bound(value);
    }
}

/// Render one plot window's contents. `window_id` salts every egui id so
/// concurrently open plot windows never share panel or plot state.
pub fn show(
    ctx: &egui::Context,
    window_id: &str,
    model: &mut PlotModel,
    state: &mut PlotPageState,
    title: &str,
) {
    egui::TopBottomPanel::top(egui::Id::new(("plot_header", window_id))).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if state.show_settings {
                    "Close Settings"
                } else {
                    "Open Settings"
                };
                if ui.button(label).clicked() {
                    state.show_settings = !state.show_settings;
                }
            });
        });
    });

    if state.show_settings {
        egui::SidePanel::left(egui::Id::new(("plot_settings", window_id)))
            .default_width(240.0)
            .show(ctx, |ui| {
                render_settings(ui, window_id, model, state);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let descriptor = derive(&model.settings);
        render_chart(ui, window_id, &descriptor);
    });
}

fn render_settings(
    ui: &mut egui::Ui,
    window_id: &str,
    model: &mut PlotModel,
    state: &mut PlotPageState,
) {
    ui.strong("Plot Settings");
    ui.separator();

    ui.label("X-Axis Range");
    ui.horizontal(|ui| {
        ui.label("Min");
        range_field(ui, &mut state.x_min, |raw| {
            model.set_x_range(Bound::Min, raw);
            model.settings.x_range.min
        });
        ui.label("Max");
        range_field(ui, &mut state.x_max, |raw| {
            model.set_x_range(Bound::Max, raw);
            model.settings.x_range.max
        });
    });

    ui.separator();
    let mut hover = model.settings.show_hover_line;
    if ui
        .checkbox(&mut hover, "Show unified vertical hover line")
        .changed()
    {
        model.set_hover_line(hover);
    }

    ui.separator();
    ui.label("Channels");

    // Work from a snapshot so edits can flow through the model while rows render.
    let channels = model.settings.channels.clone();
    for ch in &channels {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let mut enabled = ch.enabled;
            if ui.checkbox(&mut enabled, &ch.label).changed() {
                model.toggle_channel(&ch.id);
            }
            let mut color = ch.color;
            if ui.color_edit_button_srgba(&mut color).changed() {
                model.set_color(&ch.id, color);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Scale");
            egui::ComboBox::from_id_salt(("scale", window_id, &ch.id))
                .selected_text(ch.scale.label())
                .show_ui(ui, |ui| {
                    for scale in [AxisScale::Linear, AxisScale::Log] {
                        if ui.selectable_label(ch.scale == scale, scale.label()).clicked() {
                            model.set_scale(&ch.id, scale);
                        }
                    }
                });
        });
        ui.horizontal(|ui| {
            let buffers = state
                .channel_ranges
                .entry(ch.id.clone())
                .or_insert_with(|| (fmt_bound(ch.range.min), fmt_bound(ch.range.max)));
            ui.label("Min");
            range_field(ui, &mut buffers.0, |raw| {
                model.set_channel_range(&ch.id, Bound::Min, raw);
                channel_bound(model, &ch.id, Bound::Min)
            });
            ui.label("Max");
            range_field(ui, &mut buffers.1, |raw| {
                model.set_channel_range(&ch.id, Bound::Max, raw);
                channel_bound(model, &ch.id, Bound::Max)
            });
        });
    }
}

fn channel_bound(model: &PlotModel, channel_id: &str, bound: Bound) -> Option<f64> {
    model
        .settings
        .channels
        .iter()
        .find(|c| c.id == channel_id)
        .and_then(|c| match bound {
            Bound::Min => c.range.min,
            Bound::Max => c.range.max,
        })
}

/// Map a data value into plot space for the given scale: log axes plot
/// log10(y), omitting non-positive samples.
fn to_plot_y(scale: AxisScale, y: f64) -> f64 {
    match scale {
        AxisScale::Linear => y,
        AxisScale::Log => {
            if y > 0.0 {
                y.log10()
            } else {
                f64::NAN
            }
        }
    }
}

fn render_chart(ui: &mut egui::Ui, window_id: &str, descriptor: &PlotDescriptor) {
    let hover = descriptor.series.first().map(|s| s.hover).unwrap_or(false);
    let primary = descriptor.axes.first();

    let mut plot = Plot::new(("telemetry_plot", window_id))
        .legend(Legend::default())
        .x_axis_label("Sample");

    if let Some(min) = descriptor.x_axis.range.min {
        plot = plot.include_x(min);
    }
    if let Some(max) = descriptor.x_axis.range.max {
        plot = plot.include_x(max);
    }

    if let Some(axis) = primary {
        plot = plot.y_axis_label(axis.label.clone());
        for bound in [axis.range.min, axis.range.max].into_iter().flatten() {
            let y = to_plot_y(axis.scale, bound);
            if y.is_finite() {
                plot = plot.include_y(y);
            }
        }
    }

    if !hover {
        plot = plot.label_formatter(|_, _| String::new());
    }

    // Axes beyond the primary are stacked on the opposite side; list them
    // above the chart in their offset order. Rendered first because the plot
    // consumes all remaining panel space.
    if descriptor.axes.len() > 1 {
        ui.horizontal_wrapped(|ui| {
            for axis in descriptor.axes.iter().skip(1) {
                let mut text = format!("{} [{}]", axis.label, axis.scale.label());
                if !axis.range.is_auto() {
                    text.push_str(&format!(
                        " {}..{}",
                        fmt_bound(axis.range.min),
                        fmt_bound(axis.range.max)
                    ));
                }
                ui.label(egui::RichText::new(text).color(axis.color).small());
            }
        });
    }

    plot.show(ui, |plot_ui| {
        for series in &descriptor.series {
            let scale = descriptor
                .axes
                .iter()
                .find(|a| a.id == series.axis_id)
                .map(|a| a.scale)
                .unwrap_or(AxisScale::Linear);
            let points: PlotPoints = series
                .points
                .iter()
                .map(|p| [p[0], to_plot_y(scale, p[1])])
                .collect();
            plot_ui.line(
                Line::new(series.label.clone(), points)
                    .color(series.color)
                    .width(2.0),
            );
        }
        if hover {
            if let Some(pointer) = plot_ui.pointer_coordinate() {
                plot_ui.vline(
                    VLine::new("hover", pointer.x).color(egui::Color32::from_gray(120)),
                );
            }
        }
    });
}
