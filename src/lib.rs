//! telemon crate root: re-exports and module wiring.
//!
//! telemon is a desktop telemetry-visualization shell built on egui/eframe:
//! a page-routed main window that launches independent plot windows, maps raw
//! telemetry channels onto standardized signal categories, and persists
//! quick-launch presets.
//!
//! The implementation is organised into cohesive modules:
//! - `catalog`: static channel/category registry with indexed lookups
//! - `mapping`: keyword-based category inference for raw channels
//! - `assignment`: the channel-assignment state model and its edit rules
//! - `plotcfg`: per-window plot configuration and its renderer derivation
//! - `presets`: quick-launch presets and their key-value persistence
//! - `windows`: the plot-window registry (host-integration boundary)
//! - `worker`: lifecycle of the single external worker process
//! - `pages` / `app`: the egui shell built on top of the models above

pub mod app;
pub mod assignment;
pub mod catalog;
pub mod error;
pub mod mapping;
pub mod pages;
pub mod plotcfg;
pub mod presets;
pub mod storage;
pub mod windows;
pub mod worker;

// Public re-exports for a compact external API
pub use assignment::{AssignmentModel, ChannelAssignment};
pub use catalog::{Catalog, RawChannel, SecondaryOption, StandardCategory, CATALOG};
pub use error::ShellError;
pub use plotcfg::{AxisRange, AxisScale, Bound, ChannelConfig, PlotModel, PlotSettings};
pub use presets::{built_in_presets, merge, Preset, StoredPreset};
pub use storage::{KvStore, MemoryStore};
pub use windows::{PlotWindowConfig, PlotWindowRegistry};
pub use worker::WorkerProcess;
