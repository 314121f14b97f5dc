//! Shell application module.
//!
//! | Sub-module    | Responsibility |
//! | ------------- | -------------- |
//! | [`shell_app`] | The [`ShellApp`] eframe application: menu, sidebar, page routing, plot viewports |
//! | [`run`]       | Top-level [`run_shell()`] entry point and icon loading |

mod run;
mod shell_app;

pub use run::run_shell;
pub use shell_app::ShellApp;

/// Pages reachable from the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Channels,
    Setup,
    Analytics,
    Alerts,
    Reports,
    Settings,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Channels,
        Page::Setup,
        Page::Analytics,
        Page::Alerts,
        Page::Reports,
        Page::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Channels => "Channel Setup",
            Page::Setup => "Setup",
            Page::Analytics => "Analytics",
            Page::Alerts => "Alerts",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => egui_phosphor::regular::HOUSE,
            Page::Channels => egui_phosphor::regular::FADERS,
            Page::Setup => egui_phosphor::regular::CLIPBOARD_TEXT,
            Page::Analytics => egui_phosphor::regular::CHART_BAR,
            Page::Alerts => egui_phosphor::regular::BELL,
            Page::Reports => egui_phosphor::regular::FILE_TEXT,
            Page::Settings => egui_phosphor::regular::GEAR,
        }
    }
}
