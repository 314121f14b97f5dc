//! Quick-launch presets: named bundles of channel selections and scale
//! settings, persisted as a single JSON value in key-value storage.
//!
//! Only `{id, channels, y_scale}` is persisted, via the [`StoredPreset`]
//! mirror type. Title, description and icon always come from the built-in
//! set; stored entries whose id matches no built-in are dropped on load.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::plotcfg::AxisScale;
use crate::storage::KvStore;

/// Storage key for the persisted preset list.
pub const STORAGE_KEY: &str = "telemon.plot-presets";

/// A quick-launch preset as used by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Phosphor glyph shown on the preset card.
    pub icon: &'static str,
    pub channels: Vec<String>,
    pub y_scale: AxisScale,
}

/// Serializable subset of a preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPreset {
    pub id: String,
    pub channels: Vec<String>,
    #[serde(rename = "yScale")]
    pub y_scale: AxisScale,
}

impl From<&Preset> for StoredPreset {
    fn from(p: &Preset) -> Self {
        Self {
            id: p.id.to_string(),
            channels: p.channels.clone(),
            y_scale: p.y_scale,
        }
    }
}

/// The built-in default preset set, in dashboard display order.
pub fn built_in_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "engine-performance",
            title: "Engine Performance",
            description: "Engine temperatures and manifold pressure for quick health checks.",
            icon: egui_phosphor::regular::GEAR,
            channels: vec![
                "engine.temp_A".to_string(),
                "engine.temp_B".to_string(),
                "pneumatics.pressure".to_string(),
            ],
            y_scale: AxisScale::Linear,
        },
        Preset {
            id: "vibration-monitor",
            title: "Vibration Monitor",
            description: "IMU acceleration channels to spot vibration spikes.",
            icon: egui_phosphor::regular::SPARKLE,
            channels: vec![
                "imu.accel_x".to_string(),
                "imu.accel_y".to_string(),
                "imu.accel_z".to_string(),
            ],
            y_scale: AxisScale::Linear,
        },
        Preset {
            id: "power-quality",
            title: "Power Quality",
            description: "Track bus voltage and convertor performance.",
            icon: egui_phosphor::regular::CHART_BAR,
            channels: vec!["power.bus_voltage".to_string()],
            y_scale: AxisScale::Linear,
        },
        Preset {
            id: "custom-analysis",
            title: "Custom Analysis",
            description: "A blank preset you can customise for ad-hoc investigations.",
            icon: egui_phosphor::regular::DEVICE_TABLET,
            channels: Vec::new(),
            y_scale: AxisScale::Linear,
        },
    ]
}

/// Merge stored overrides onto the built-in set, by id.
///
/// Built-in metadata wins for everything outside the persisted shape; stored
/// `channels`/`y_scale` override the defaults when an id matches. Stored ids
/// with no built-in counterpart are ignored, and built-ins missing from
/// storage keep their defaults, so the result always has exactly one entry
/// per built-in preset.
pub fn merge(builtins: Vec<Preset>, stored: &[StoredPreset]) -> Vec<Preset> {
    builtins
        .into_iter()
        .map(|mut preset| {
            if let Some(s) = stored.iter().find(|s| s.id == preset.id) {
                preset.channels = s.channels.clone();
                preset.y_scale = s.y_scale;
            }
            preset
        })
        .collect()
}

/// Load presets from storage, falling back to the built-in set on any
/// missing, unreadable, or malformed stored value.
pub fn load(store: &dyn KvStore) -> Vec<Preset> {
    let builtins = built_in_presets();
    let Some(raw) = store.get(STORAGE_KEY) else {
        return builtins;
    };
    match serde_json::from_str::<Vec<StoredPreset>>(&raw) {
        Ok(stored) => merge(builtins, &stored),
        Err(err) => {
            warn!("failed to read stored presets, using defaults: {err}");
            builtins
        }
    }
}

/// Persist the full preset set (persistable subset only). Write failures are
/// logged and swallowed.
pub fn save(store: &mut dyn KvStore, presets: &[Preset]) {
    let payload: Vec<StoredPreset> = presets.iter().map(StoredPreset::from).collect();
    match serde_json::to_string(&payload) {
        Ok(json) => store.set(STORAGE_KEY, json),
        Err(err) => warn!("failed to persist presets: {err}"),
    }
}
