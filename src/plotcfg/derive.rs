//! Pure derivation of the renderer input from [`PlotSettings`].
//!
//! The renderer is a black box that consumes the descriptor produced here;
//! nothing in this module touches egui state. Derivation is recomputed on
//! every settings change and must be deterministic: the synthetic waveform
//! for a channel is keyed off a hash of its id so re-renders within a
//! session always produce the same shape.

use egui::Color32;

use super::types::{AxisRange, AxisScale, ChannelConfig, PlotSettings};

/// Number of synthetic samples generated per series.
pub const SAMPLES_PER_SERIES: usize = 120;

/// One renderable series: points plus presentation tags.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub label: String,
    pub color: Color32,
    pub axis_id: String,
    pub points: Vec<[f64; 2]>,
    /// Whether the renderer should attach point-level hover metadata.
    pub hover: bool,
}

/// Placement of a y axis relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSide {
    /// First axis in iteration order; rendered on the primary side.
    Primary,
    /// Subsequent axes, stacked on the opposite side. `position` is the
    /// horizontal placement fraction, decreasing per extra axis so the axes
    /// do not overlap.
    Opposite { position: f64 },
}

/// One y-axis definition, inheriting the owning channel's presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    pub id: String,
    pub label: String,
    pub color: Color32,
    pub scale: AxisScale,
    pub range: AxisRange,
    pub side: AxisSide,
}

/// The shared x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XAxisDescriptor {
    pub range: AxisRange,
}

/// Complete renderer input for one plot window.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDescriptor {
    pub series: Vec<SeriesDescriptor>,
    /// Axis definitions in first-seen order; ids are unique.
    pub axes: Vec<AxisDescriptor>,
    pub x_axis: XAxisDescriptor,
}

/// FNV-1a hash, used to derive a stable per-channel waveform phase.
fn fnv1a(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn waveform_phase(channel_id: &str) -> f64 {
    (fnv1a(channel_id) % 1000) as f64 / 1000.0 * std::f64::consts::TAU
}

/// Synthetic sample generator: a sine with a per-channel phase, shifted and
/// scaled into a plausible band for the well-known channel kinds.
fn sample_value(channel_id: &str, x: f64) -> f64 {
    let base = (x / 12.0 + waveform_phase(channel_id)).sin();
    match channel_id {
        "temperature" => base * 5.0 + 22.0,
        "pressure" => base * 3.0 + 101.0,
        "humidity" => base * 10.0 + 50.0,
        _ => base,
    }
}

fn series_for(channel: &ChannelConfig, hover: bool) -> SeriesDescriptor {
    let points = (0..SAMPLES_PER_SERIES)
        .map(|i| {
            let x = i as f64;
            [x, sample_value(&channel.id, x)]
        })
        .collect();
    SeriesDescriptor {
        label: channel.label.clone(),
        color: channel.color,
        axis_id: channel.axis_id.clone(),
        points,
        hover,
    }
}

/// Derive the full renderer input from the current settings.
pub fn derive(settings: &PlotSettings) -> PlotDescriptor {
    let active: Vec<&ChannelConfig> = settings.channels.iter().filter(|c| c.enabled).collect();

    let series = active
        .iter()
        .map(|ch| series_for(ch, settings.show_hover_line))
        .collect();

    // Axis sources fall back to the first configured channel when nothing is
    // active, so the renderer always sees at least one axis (as long as any
    // channel is configured at all).
    let axis_sources: Vec<&ChannelConfig> = if active.is_empty() {
        settings.channels.first().into_iter().collect()
    } else {
        active
    };

    let mut axes: Vec<AxisDescriptor> = Vec::new();
    for ch in axis_sources {
        if axes.iter().any(|a| a.id == ch.axis_id) {
            continue;
        }
        let side = if axes.is_empty() {
            AxisSide::Primary
        } else {
            let extra = axes.len() - 1;
            AxisSide::Opposite {
                position: (1.0 - extra as f64 * 0.08).max(0.7),
            }
        };
        axes.push(AxisDescriptor {
            id: ch.axis_id.clone(),
            label: ch.label.clone(),
            color: ch.color,
            scale: ch.scale,
            range: ch.range,
            side,
        });
    }

    PlotDescriptor {
        series,
        axes,
        x_axis: XAxisDescriptor {
            range: settings.x_range,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_is_stable_per_channel() {
        let a: Vec<f64> = (0..8).map(|i| sample_value("engine.temp_A", i as f64)).collect();
        let b: Vec<f64> = (0..8).map(|i| sample_value("engine.temp_A", i as f64)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_channels_get_distinct_phases() {
        assert_ne!(
            waveform_phase("imu.accel_x"),
            waveform_phase("imu.accel_y")
        );
    }
}
