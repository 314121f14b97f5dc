//! Page modules for the shell UI.
//!
//! | Module           | Responsibility |
//! | ---------------- | -------------- |
//! | [`dashboard_ui`] | Quick-launch preset cards and the open-windows list |
//! | [`channels_ui`]  | Channel-to-standard mapping table |
//! | [`plot_ui`]      | Plot-window body: settings panel + chart rendering |
//! | [`placeholder_ui`] | Single-paragraph pages not yet built out |

pub mod channels_ui;
pub mod dashboard_ui;
pub mod placeholder_ui;
pub mod plot_ui;
