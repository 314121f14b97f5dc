//! Per-plot-window configuration and its renderer-ready derivation.
//!
//! Each plot window owns one [`PlotModel`]; user edits flow through the model
//! operations and [`derive::derive`] recomputes the series/axis description
//! the renderer consumes on every change.

mod derive;
mod model;
mod types;

pub use derive::{
    derive, AxisDescriptor, AxisSide, PlotDescriptor, SeriesDescriptor, XAxisDescriptor,
    SAMPLES_PER_SERIES,
};
pub use model::{Bound, PlotModel};
pub use types::{palette_color, AxisRange, AxisScale, ChannelConfig, PlotSettings};
