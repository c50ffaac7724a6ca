#[path = "app/context.rs"]
mod context;
mod details;
mod lifecycle;
mod navigation;
mod quick_add;
mod settings;
mod state;
mod toast;
mod views;

use self::context::AppContext;
use self::quick_add::QuickAddState;
use self::state::HostState;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::ui_egui::settings_dialog::SettingsDraft;
use crate::ui_egui::theme::CalendarTheme;

pub struct CalendarApp {
    /// Leaked database, bootstrap config and the active event source
    context: AppContext,
    /// Persisted view settings
    settings: Settings,
    /// Navigation state the views report back to
    host: HostState,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    quick_add: Option<QuickAddState>,
    /// Open settings window, if any
    settings_draft: Option<SettingsDraft>,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}
