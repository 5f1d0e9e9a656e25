//! UI layer for desktop GUI: app shell, navigation, dashboard, form and table panels.

pub mod app;

pub use app::DesktopGuiApp;
