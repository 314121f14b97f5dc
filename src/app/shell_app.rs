//! The shell application: a page-routed main window plus one egui viewport
//! per open plot window.
//!
//! Every state transition runs to completion on the UI thread; the only
//! recurring background activity is a slow poll tick that refreshes the
//! dashboard's open-window list and checks the worker process for an
//! unexpected exit. Both are fire-and-forget and never touch core state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use eframe::egui;
use log::debug;

use crate::assignment::AssignmentModel;
use crate::pages;
use crate::pages::plot_ui::PlotPageState;
use crate::presets::{self, Preset};
use crate::storage::KvStore;
use crate::windows::{PlotWindowConfig, PlotWindowRegistry};
use crate::worker::WorkerProcess;

use super::Page;

/// Interval for the display-list / worker poll tick.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

const DOCS_URL: &str = "https://github.com/your-org/telemon";

/// Read-only adapter over the storage handle eframe exposes at creation
/// time. Writes are not possible through this handle, so `set` drops the
/// value; all persisting goes through [`SaveStorage`].
struct StartupStorage<'a>(&'a dyn eframe::Storage);

impl KvStore for StartupStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, _key: &str, _value: String) {}
}

/// Adapter over the mutable storage handle passed to [`eframe::App::save`].
struct SaveStorage<'a>(&'a mut dyn eframe::Storage);

impl KvStore for SaveStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

pub struct ShellApp {
    page: Page,
    assignments: AssignmentModel,
    presets: Vec<Preset>,
    windows: PlotWindowRegistry,
    /// UI scratch per plot window, pruned when the window closes.
    plot_pages: HashMap<String, PlotPageState>,
    worker: WorkerProcess,
    /// Cached open-window list shown on the dashboard; refreshed by the poll
    /// tick rather than read live.
    open_window_ids: Vec<String>,
    last_poll: Option<Instant>,
}

impl ShellApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let presets = match cc.storage {
            Some(storage) => presets::load(&StartupStorage(storage)),
            None => presets::built_in_presets(),
        };
        // The worker is started at most once per application run; its
        // handle's Drop terminates it on shutdown.
        let mut worker = WorkerProcess::from_env();
        worker.start();
        Self {
            page: Page::Home,
            assignments: AssignmentModel::new(),
            presets,
            windows: PlotWindowRegistry::new(),
            plot_pages: HashMap::new(),
            worker,
            open_window_ids: Vec::new(),
            last_poll: None,
        }
    }

    fn poll_tick(&mut self) {
        let due = self
            .last_poll
            .map_or(true, |t| t.elapsed() >= POLL_INTERVAL);
        if !due {
            return;
        }
        self.last_poll = Some(Instant::now());
        self.open_window_ids = self.windows.ids();
        self.worker.poll_exit();
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Plot Window").clicked() {
                        self.windows.open(PlotWindowConfig::blank());
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("Project Documentation").clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(DOCS_URL));
                        ui.close();
                    }
                });
            });
        });
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Telemetry Monitor");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New Plot Window").clicked() {
                        self.windows.open(PlotWindowConfig::blank());
                    }
                });
            });
        });
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(170.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for page in Page::ALL {
                    let text = format!("{}  {}", page.icon(), page.label());
                    if ui.selectable_label(self.page == page, text).clicked() {
                        self.page = page;
                    }
                }
            });
    }

    fn render_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => {
                let changed = pages::dashboard_ui::show(
                    ui,
                    &mut self.presets,
                    &self.open_window_ids,
                    &mut self.windows,
                    self.worker.is_running(),
                );
                if changed {
                    // Re-persisted in full on the next save tick.
                    debug!("preset set edited");
                }
            }
            Page::Channels => pages::channels_ui::show(ui, &mut self.assignments),
            Page::Setup => pages::placeholder_ui::show(
                ui,
                "Setup",
                "This page will guide environment and workspace configuration in a future iteration.",
            ),
            Page::Analytics => pages::placeholder_ui::show(
                ui,
                "Analytics",
                "Future analytics and trend analysis visualizations will appear here.",
            ),
            Page::Alerts => pages::placeholder_ui::show(
                ui,
                "Alerts",
                "Configure alert thresholds and review recent alert history in this area.",
            ),
            Page::Reports => pages::placeholder_ui::show(
                ui,
                "Reports",
                "Export historical telemetry and generate PDF/CSV reports from here.",
            ),
            Page::Settings => pages::placeholder_ui::show(
                ui,
                "Application Settings",
                "Manage application preferences, integrations, and workspace defaults.",
            ),
        });
    }

    fn render_plot_windows(&mut self, ctx: &egui::Context) {
        let mut closed: Vec<String> = Vec::new();
        for window in self.windows.windows_mut() {
            let state = self
                .plot_pages
                .entry(window.id.clone())
                .or_insert_with(|| PlotPageState::from_model(&window.model));
            let viewport_id = egui::ViewportId::from_hash_of(&window.id);
            let builder = egui::ViewportBuilder::default()
                .with_title(window.title.clone())
                .with_inner_size(egui::vec2(800.0, 600.0))
                .with_min_inner_size(egui::vec2(480.0, 320.0));
            ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
                if window.focus_requested {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                    window.focus_requested = false;
                }
                pages::plot_ui::show(ctx, &window.id, &mut window.model, state, &window.title);
                if ctx.input(|i| i.viewport().close_requested()) {
                    closed.push(window.id.clone());
                }
            });
        }
        for id in closed {
            self.windows.close(&id);
            self.plot_pages.remove(&id);
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tick();
        // Keep the poll tick firing even when no input arrives.
        ctx.request_repaint_after(POLL_INTERVAL);

        self.render_menu_bar(ctx);
        self.render_header(ctx);
        self.render_sidebar(ctx);
        self.render_page(ctx);
        self.render_plot_windows(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        presets::save(&mut SaveStorage(storage), &self.presets);
    }
}
