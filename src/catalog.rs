//! Static registry of raw telemetry channels and standardized signal categories.
//!
//! The catalog is fixed at build time: raw channels describe the incoming
//! telemetry signals by source-specific name, standard categories describe the
//! normalized signal types they can be mapped onto. Lookups by id go through
//! prebuilt index maps so per-edit catalog access stays O(1).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// An incoming telemetry signal identified by a source-specific name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChannel {
    pub id: &'static str,
    pub name: &'static str,
    pub source: &'static str,
    pub description: Option<&'static str>,
}

/// A normalized signal type with a canonical unit set.
///
/// `units[0]` is the category's default unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub units: &'static [&'static str],
    pub supports_secondary: bool,
}

impl StandardCategory {
    pub fn default_unit(&self) -> &'static str {
        self.units[0]
    }
}

/// An optional derived sub-measurement (e.g. peak/RMS), available only for
/// categories with `supports_secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const RAW_CHANNELS: &[RawChannel] = &[
    RawChannel {
        id: "engine.temp_A",
        name: "Engine Temperature A",
        source: "Engine Rack",
        description: Some("Thermocouple mounted on intake manifold"),
    },
    RawChannel {
        id: "engine.temp_B",
        name: "Engine Temperature B",
        source: "Engine Rack",
        description: Some("Thermocouple mounted on exhaust manifold"),
    },
    RawChannel {
        id: "pneumatics.pressure",
        name: "Pneumatics Pressure",
        source: "PDU",
        description: Some("Main pneumatic manifold pressure transducer"),
    },
    RawChannel {
        id: "coolant.flow_rate",
        name: "Coolant Flow Rate",
        source: "Cooling Loop",
        description: Some("Magnetic flow sensor inside return line"),
    },
    RawChannel {
        id: "imu.accel_x",
        name: "IMU Acceleration X",
        source: "Navigation IMU",
        description: Some("Linear acceleration along vehicle X axis"),
    },
    RawChannel {
        id: "imu.accel_y",
        name: "IMU Acceleration Y",
        source: "Navigation IMU",
        description: None,
    },
    RawChannel {
        id: "imu.accel_z",
        name: "IMU Acceleration Z",
        source: "Navigation IMU",
        description: None,
    },
    RawChannel {
        id: "power.bus_voltage",
        name: "Bus Voltage",
        source: "Power Module",
        description: Some("Main 28V DC bus measurement"),
    },
];

pub const STANDARD_CATEGORIES: &[StandardCategory] = &[
    StandardCategory {
        id: "temperature",
        label: "Temperature",
        units: &["°C", "°F", "K"],
        supports_secondary: false,
    },
    StandardCategory {
        id: "pressure",
        label: "Pressure",
        units: &["kPa", "psi", "bar"],
        supports_secondary: false,
    },
    StandardCategory {
        id: "flow_rate",
        label: "Flow Rate",
        units: &["L/min", "m³/h", "gpm"],
        supports_secondary: false,
    },
    StandardCategory {
        id: "accel_x",
        label: "Acceleration X",
        units: &["m/s²", "g"],
        supports_secondary: true,
    },
    StandardCategory {
        id: "accel_y",
        label: "Acceleration Y",
        units: &["m/s²", "g"],
        supports_secondary: true,
    },
    StandardCategory {
        id: "accel_z",
        label: "Acceleration Z",
        units: &["m/s²", "g"],
        supports_secondary: true,
    },
    StandardCategory {
        id: "bus_voltage",
        label: "Bus Voltage",
        units: &["V"],
        supports_secondary: false,
    },
    StandardCategory {
        id: "custom",
        label: "Custom Mapping",
        units: &["unit"],
        supports_secondary: false,
    },
];

const SECONDARY_OPTIONS: &[(&str, &[SecondaryOption])] = &[
    (
        "accel_x",
        &[
            SecondaryOption { id: "accel_x_peak", label: "Peak Acceleration" },
            SecondaryOption { id: "accel_x_rms", label: "RMS Acceleration" },
        ],
    ),
    (
        "accel_y",
        &[
            SecondaryOption { id: "accel_y_peak", label: "Peak Acceleration" },
            SecondaryOption { id: "accel_y_rms", label: "RMS Acceleration" },
        ],
    ),
    (
        "accel_z",
        &[
            SecondaryOption { id: "accel_z_peak", label: "Peak Acceleration" },
            SecondaryOption { id: "accel_z_rms", label: "RMS Acceleration" },
        ],
    ),
];

/// Indexed view over the static channel/category tables.
pub struct Catalog {
    channel_index: HashMap<&'static str, usize>,
    category_index: HashMap<&'static str, usize>,
    secondary_index: HashMap<&'static str, &'static [SecondaryOption]>,
}

impl Catalog {
    fn build() -> Self {
        let channel_index = RAW_CHANNELS
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let category_index = STANDARD_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let secondary_index = SECONDARY_OPTIONS.iter().copied().collect();
        Self {
            channel_index,
            category_index,
            secondary_index,
        }
    }

    /// All raw channels, in declaration (catalog) order.
    pub fn channels(&self) -> &'static [RawChannel] {
        RAW_CHANNELS
    }

    /// All standard categories, in declaration order.
    pub fn categories(&self) -> &'static [StandardCategory] {
        STANDARD_CATEGORIES
    }

    pub fn channel(&self, id: &str) -> Option<&'static RawChannel> {
        self.channel_index.get(id).map(|&i| &RAW_CHANNELS[i])
    }

    pub fn category(&self, id: &str) -> Option<&'static StandardCategory> {
        self.category_index.get(id).map(|&i| &STANDARD_CATEGORIES[i])
    }

    /// Secondary options for a category; empty for categories without them.
    pub fn secondary_options(&self, category_id: &str) -> &'static [SecondaryOption] {
        self.secondary_index.get(category_id).copied().unwrap_or(&[])
    }

    pub fn is_valid_secondary(&self, category_id: &str, secondary_id: &str) -> bool {
        self.secondary_options(category_id)
            .iter()
            .any(|opt| opt.id == secondary_id)
    }
}

/// Shared catalog instance.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_lookup_matches_linear_scan() {
        for ch in RAW_CHANNELS {
            assert_eq!(CATALOG.channel(ch.id).map(|c| c.id), Some(ch.id));
        }
        for cat in STANDARD_CATEGORIES {
            assert_eq!(CATALOG.category(cat.id).map(|c| c.id), Some(cat.id));
        }
        assert!(CATALOG.channel("nope").is_none());
    }

    #[test]
    fn secondary_options_only_on_supporting_categories() {
        for cat in STANDARD_CATEGORIES {
            let opts = CATALOG.secondary_options(cat.id);
            assert_eq!(cat.supports_secondary, !opts.is_empty());
        }
    }

    #[test]
    fn every_category_has_a_default_unit() {
        for cat in STANDARD_CATEGORIES {
            assert!(!cat.units.is_empty());
            assert_eq!(cat.default_unit(), cat.units[0]);
        }
    }
}
