use super::CalendarApp;
use crate::ui_egui::settings_dialog::{render_settings_dialog, SettingsDraft};

impl CalendarApp {
    pub(super) fn open_settings(&mut self) {
        let mut current = self.settings.clone();
        current.current_view = self.host.view.as_str().to_string();
        self.settings_draft = Some(SettingsDraft::from_settings(&current));
    }

    pub(super) fn render_settings_window(&mut self, ctx: &egui::Context) {
        let Some(draft) = self.settings_draft.as_mut() else {
            return;
        };

        let response = render_settings_dialog(ctx, draft, self.context.database());

        if let Some(saved) = response.saved {
            self.settings = saved;
            self.apply_theme(ctx);
            self.toast_manager.success("Settings saved");
        }
        if response.closed {
            self.settings_draft = None;
        }
    }
}
