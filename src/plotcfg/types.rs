use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;

/// Y-axis scale for a channel's axis slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

impl AxisScale {
    pub fn label(&self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AxisScale::Linear => AxisScale::Log,
            AxisScale::Log => AxisScale::Linear,
        }
    }
}

/// Axis bounds; `None` on either side means auto/unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    pub const UNBOUNDED: AxisRange = AxisRange {
        min: None,
        max: None,
    };

    pub fn is_auto(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Display configuration for one channel within a plot window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    pub id: String,
    pub label: String,
    pub color: Color32,
    pub enabled: bool,
    /// Y-axis slot this channel plots against ("y", "y2", ...).
    pub axis_id: String,
    pub scale: AxisScale,
    pub range: AxisRange,
}

/// Allocate a distinct color for the given channel index.
pub fn palette_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 10] = [
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ];
    PALETTE[index % PALETTE.len()]
}

fn axis_slot(index: usize) -> String {
    if index == 0 {
        "y".to_string()
    } else {
        format!("y{}", index + 1)
    }
}

/// Window-scoped plot state: the channel list, the shared x range, and the
/// hover-line toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub channels: Vec<ChannelConfig>,
    pub x_range: AxisRange,
    pub show_hover_line: bool,
}

impl PlotSettings {
    /// The built-in default channel set: temperature and pressure enabled,
    /// humidity present but initially disabled.
    pub fn with_default_channels() -> Self {
        Self {
            channels: vec![
                ChannelConfig {
                    id: "temperature".to_string(),
                    label: "Temperature (°C)".to_string(),
                    color: Color32::from_rgb(0xf9, 0x73, 0x16),
                    enabled: true,
                    axis_id: "y".to_string(),
                    scale: AxisScale::Linear,
                    range: AxisRange::UNBOUNDED,
                },
                ChannelConfig {
                    id: "pressure".to_string(),
                    label: "Pressure (kPa)".to_string(),
                    color: Color32::from_rgb(0x22, 0xd3, 0xee),
                    enabled: true,
                    axis_id: "y2".to_string(),
                    scale: AxisScale::Linear,
                    range: AxisRange::UNBOUNDED,
                },
                ChannelConfig {
                    id: "humidity".to_string(),
                    label: "Humidity (%)".to_string(),
                    color: Color32::from_rgb(0xa8, 0x55, 0xf7),
                    enabled: false,
                    axis_id: "y3".to_string(),
                    scale: AxisScale::Linear,
                    range: AxisRange::UNBOUNDED,
                },
            ],
            x_range: AxisRange::UNBOUNDED,
            show_hover_line: true,
        }
    }

    /// Build settings from a preset's channel id list: every listed channel
    /// becomes an enabled config with its own axis slot and a distinct
    /// palette color.
    pub fn from_channel_ids(channel_ids: &[String], scale: AxisScale) -> Self {
        let channels = channel_ids
            .iter()
            .enumerate()
            .map(|(i, id)| ChannelConfig {
                id: id.clone(),
                label: CATALOG
                    .channel(id)
                    .map(|c| c.name.to_string())
                    .unwrap_or_else(|| id.clone()),
                color: palette_color(i),
                enabled: true,
                axis_id: axis_slot(i),
                scale,
                range: AxisRange::UNBOUNDED,
            })
            .collect();
        Self {
            channels,
            x_range: AxisRange::UNBOUNDED,
            show_hover_line: true,
        }
    }
}
