//! Best-guess mapping from raw channel names to standard categories.

use crate::catalog::RawChannel;

/// Keyword-to-category table, in priority order.
///
/// The first keyword found as a substring of the lowercased channel name or
/// id wins. The order is significant and fixed: e.g. "voltage" is checked
/// before "bus", so `power.bus_voltage` resolves through "voltage" even
/// though both keywords match.
pub const KEYWORD_PRIORITY: &[(&str, &str)] = &[
    ("temperature", "temperature"),
    ("temp", "temperature"),
    ("pressure", "pressure"),
    ("flow", "flow_rate"),
    ("accel_x", "accel_x"),
    ("accel_y", "accel_y"),
    ("accel_z", "accel_z"),
    ("voltage", "bus_voltage"),
    ("bus", "bus_voltage"),
];

/// Infer the standard category for a raw channel, or `None` when no keyword
/// matches.
pub fn infer(channel: &RawChannel) -> Option<&'static str> {
    let name = channel.name.to_lowercase();
    let id = channel.id.to_lowercase();
    KEYWORD_PRIORITY
        .iter()
        .find(|(needle, _)| name.contains(needle) || id.contains(needle))
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn channel(id: &'static str, name: &'static str) -> RawChannel {
        RawChannel {
            id,
            name,
            source: "test",
            description: None,
        }
    }

    #[test]
    fn bus_voltage_resolves_through_voltage_keyword() {
        let ch = channel("power.bus_voltage", "Bus Voltage");
        assert_eq!(infer(&ch), Some("bus_voltage"));
    }

    #[test]
    fn temp_prefix_maps_to_temperature() {
        let ch = channel("engine.temp_A", "Engine Temperature A");
        assert_eq!(infer(&ch), Some("temperature"));
    }

    #[test]
    fn unmatched_channel_yields_none() {
        let ch = channel("misc.counter", "Event Counter");
        assert_eq!(infer(&ch), None);
    }

    #[test]
    fn every_keyword_targets_a_known_category() {
        for (_, target) in KEYWORD_PRIORITY {
            assert!(
                CATALOG.category(target).is_some(),
                "keyword target '{target}' missing from catalog"
            );
        }
    }
}
