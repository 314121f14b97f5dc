use egui::Color32;

use super::types::{AxisScale, PlotSettings};

/// Which side of a range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Parse a range-field edit: empty input clears the bound, anything that
/// fails to parse as a finite number is rejected (`None`).
fn parse_bound(raw: &str) -> Option<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(Some(v)),
        _ => None,
    }
}

/// State and transition rules for a single plot window.
///
/// Edits targeting an unknown channel id are silent no-ops, and malformed
/// numeric input leaves the state untouched; neither is an error at this
/// boundary.
pub struct PlotModel {
    pub settings: PlotSettings,
}

impl PlotModel {
    pub fn with_default_channels() -> Self {
        Self {
            settings: PlotSettings::with_default_channels(),
        }
    }

    pub fn from_channel_ids(channel_ids: &[String], scale: AxisScale) -> Self {
        Self {
            settings: PlotSettings::from_channel_ids(channel_ids, scale),
        }
    }

    fn channel_mut(&mut self, channel_id: &str) -> Option<&mut super::ChannelConfig> {
        self.settings
            .channels
            .iter_mut()
            .find(|c| c.id == channel_id)
    }

    pub fn toggle_channel(&mut self, channel_id: &str) {
        if let Some(ch) = self.channel_mut(channel_id) {
            ch.enabled = !ch.enabled;
        }
    }

    pub fn set_color(&mut self, channel_id: &str, color: Color32) {
        if let Some(ch) = self.channel_mut(channel_id) {
            ch.color = color;
        }
    }

    pub fn set_scale(&mut self, channel_id: &str, scale: AxisScale) {
        if let Some(ch) = self.channel_mut(channel_id) {
            ch.scale = scale;
        }
    }

    /// Update one bound of a channel's y range from raw text input.
    pub fn set_channel_range(&mut self, channel_id: &str, bound: Bound, raw: &str) {
        let Some(value) = parse_bound(raw) else {
            return;
        };
        if let Some(ch) = self.channel_mut(channel_id) {
            match bound {
                Bound::Min => ch.range.min = value,
                Bound::Max => ch.range.max = value,
            }
        }
    }

    /// Update one bound of the shared x range from raw text input.
    pub fn set_x_range(&mut self, bound: Bound, raw: &str) {
        let Some(value) = parse_bound(raw) else {
            return;
        };
        match bound {
            Bound::Min => self.settings.x_range.min = value,
            Bound::Max => self.settings.x_range.max = value,
        }
    }

    pub fn set_hover_line(&mut self, enabled: bool) {
        self.settings.show_hover_line = enabled;
    }

    /// Enabled channels in configured order.
    pub fn active_channels(&self) -> impl Iterator<Item = &super::ChannelConfig> {
        self.settings.channels.iter().filter(|c| c.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bound_contract() {
        assert_eq!(parse_bound(""), Some(None));
        assert_eq!(parse_bound("  "), Some(None));
        assert_eq!(parse_bound("12.5"), Some(Some(12.5)));
        assert_eq!(parse_bound(" -3 "), Some(Some(-3.0)));
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound("NaN"), None);
    }
}
