mod app;
pub mod settings_dialog;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
