//! Plot window registry: the host-integration boundary between the shell and
//! its plot windows.
//!
//! Each open plot window owns an independent [`PlotModel`]; the registry is
//! keyed by window id only here at the boundary, never inside the core
//! model. Closing a window destroys its entry (and with it the model).

use crate::plotcfg::{AxisScale, PlotModel};
use crate::presets::Preset;

/// Launch configuration for a plot window.
#[derive(Debug, Clone)]
pub struct PlotWindowConfig {
    /// Window id; generated (`plot-N`) when absent.
    pub id: Option<String>,
    pub title: Option<String>,
    /// Channel ids to plot. `None` selects the built-in default channel set;
    /// `Some` (possibly empty) uses exactly the listed channels.
    pub channels: Option<Vec<String>>,
    pub y_scale: AxisScale,
}

impl PlotWindowConfig {
    /// A blank window with the default channel set.
    pub fn blank() -> Self {
        Self {
            id: None,
            title: None,
            channels: None,
            y_scale: AxisScale::Linear,
        }
    }

    pub fn from_preset(preset: &Preset) -> Self {
        Self {
            id: Some(preset.id.to_string()),
            title: Some(preset.title.to_string()),
            channels: Some(preset.channels.clone()),
            y_scale: preset.y_scale,
        }
    }
}

/// One open plot window and its owned configuration model.
pub struct PlotWindow {
    pub id: String,
    pub title: String,
    pub model: PlotModel,
    /// Set when an open request targeted this already-open window; the host
    /// consumes it by focusing the native window.
    pub focus_requested: bool,
}

/// Registry of open plot windows, in open order.
#[derive(Default)]
pub struct PlotWindowRegistry {
    windows: Vec<PlotWindow>,
    opened: u64,
}

impl PlotWindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a plot window, returning its id.
    ///
    /// Re-opening an id that is already open focuses the existing window
    /// instead of stacking a second copy.
    pub fn open(&mut self, config: PlotWindowConfig) -> String {
        let id = config.id.unwrap_or_else(|| {
            self.opened += 1;
            format!("plot-{}", self.opened)
        });
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == id) {
            window.focus_requested = true;
            return id;
        }
        let model = match &config.channels {
            Some(ids) => PlotModel::from_channel_ids(ids, config.y_scale),
            None => PlotModel::with_default_channels(),
        };
        let title = config
            .title
            .unwrap_or_else(|| format!("Plot: {id}"));
        self.windows.push(PlotWindow {
            id: id.clone(),
            title,
            model,
            focus_requested: false,
        });
        id
    }

    /// Destroy the window's state. Unknown ids are ignored.
    pub fn close(&mut self, id: &str) {
        self.windows.retain(|w| w.id != id);
    }

    /// Ids of all open windows, in open order.
    pub fn ids(&self) -> Vec<String> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut PlotWindow> {
        self.windows.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_sequential() {
        let mut reg = PlotWindowRegistry::new();
        assert_eq!(reg.open(PlotWindowConfig::blank()), "plot-1");
        assert_eq!(reg.open(PlotWindowConfig::blank()), "plot-2");
        assert_eq!(reg.ids(), vec!["plot-1", "plot-2"]);
    }

    #[test]
    fn reopening_same_id_focuses_instead_of_duplicating() {
        let mut reg = PlotWindowRegistry::new();
        let config = PlotWindowConfig {
            id: Some("power-quality".to_string()),
            title: Some("Power Quality".to_string()),
            channels: Some(vec!["power.bus_voltage".to_string()]),
            y_scale: AxisScale::Linear,
        };
        reg.open(config.clone());
        reg.open(config);
        assert_eq!(reg.ids().len(), 1);
        let window = reg.windows_mut().next().unwrap();
        assert!(window.focus_requested);
    }

    #[test]
    fn close_destroys_window_state() {
        let mut reg = PlotWindowRegistry::new();
        let id = reg.open(PlotWindowConfig::blank());
        reg.close(&id);
        assert!(reg.is_empty());
        // closing an unknown id is a no-op
        reg.close("nope");
    }
}
