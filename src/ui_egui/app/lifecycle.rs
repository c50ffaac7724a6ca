use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

use super::context::AppContext;
use super::quick_add::QuickAddState;
use super::state::HostState;
use super::toast::ToastManager;
use super::CalendarApp;
use crate::models::settings::{NowMarker, Settings, ViewType};
use crate::services::config::AppConfig;
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = AppConfig::load_or_default();

        // Leaked for the 'static lifetime the event source needs
        let database = initialize_database(&config)?;

        let settings = load_settings_or_default(&SettingsService::new(database));
        log::info!(
            "Loaded settings: view={}, theme={}, month_event_cap={}",
            settings.current_view,
            settings.theme,
            settings.month_event_cap
        );

        let host = HostState::new(settings.view_type(), Local::now().date_naive());
        let context = AppContext::new(database, config);

        let mut app = Self {
            context,
            settings,
            host,
            active_theme: CalendarTheme::light(),
            quick_add: None,
            settings_draft: None,
            toast_manager: ToastManager::new(),
        };
        app.apply_theme(&cc.egui_ctx);
        Ok(app)
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::from_preference(&self.settings.theme);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_toolbar(ctx);
        self.render_details_panel(ctx);
        self.render_main_panel(ctx);

        if let Some((date, time)) = self.host.take_pending_add() {
            self.quick_add = Some(QuickAddState::new(date, time));
        }
        self.render_quick_add(ctx);
        self.render_settings_window(ctx);

        self.toast_manager.render(ctx, &self.active_theme);

        // Keep the live "now" line moving
        if self.host.view == ViewType::Day && self.settings.now_marker() == NowMarker::Live {
            ctx.request_repaint_after(Duration::from_secs(30));
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|input| {
            if input.key_pressed(egui::Key::ArrowLeft) {
                self.host.navigate_previous();
            }
            if input.key_pressed(egui::Key::ArrowRight) {
                self.host.navigate_next();
            }
            if input.key_pressed(egui::Key::T) {
                self.host.jump_to_today(Local::now().date_naive());
            }
            if input.key_pressed(egui::Key::Escape) {
                self.host.open_event = None;
            }
        });
    }

    pub(super) fn handle_exit(&mut self) {
        let view = self.host.view;
        match self.context.settings_service().set_current_view(view) {
            Ok(()) => log::info!("Saved current view: {}", view),
            Err(err) => log::warn!("Failed to save current view: {:#}", err),
        }
    }
}

fn initialize_database(config: &AppConfig) -> Result<&'static Database> {
    let db_path = config.resolve_database_path();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            log::warn!("Failed to create data directory {}: {}", parent.display(), err);
        }
    }

    let opened = Database::new(&db_path.to_string_lossy()).and_then(|db| {
        db.initialize_schema()?;
        Ok(db)
    });

    let db = match opened {
        Ok(db) => {
            log::info!("Opened database at {}", db_path.display());
            db
        }
        Err(err) => {
            log::error!("{:#}; falling back to an in-memory database", err);
            Database::in_memory().context("Failed to open fallback in-memory database")?
        }
    };

    Ok(Box::leak(Box::new(db)))
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => match settings.validate() {
            Ok(()) => settings,
            Err(reason) => {
                log::warn!("Stored settings are invalid ({}), using defaults", reason);
                Settings::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("UPDATE settings SET month_event_cap = 0 WHERE id = 1" ; "zero month cap")]
    #[test_case("UPDATE settings SET week_start_hour = 30 WHERE id = 1" ; "week hours past midnight")]
    #[test_case("UPDATE settings SET now_marker = 'sometimes' WHERE id = 1" ; "unknown marker")]
    #[test_case("UPDATE settings SET theme = 'neon' WHERE id = 1" ; "unknown theme")]
    fn test_invalid_stored_settings_fall_back_to_defaults(sql: &str) {
        let db = Database::in_memory().unwrap();
        db.connection().execute(sql, []).unwrap();

        let settings = load_settings_or_default(&SettingsService::new(&db));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_valid_stored_settings_are_kept() {
        let db = Database::in_memory().unwrap();
        let service = SettingsService::new(&db);
        let stored = Settings {
            theme: "dark".to_string(),
            month_event_cap: 3,
            ..Settings::default()
        };
        service.update(&stored).unwrap();

        assert_eq!(load_settings_or_default(&service), service.get().unwrap());
        assert_eq!(load_settings_or_default(&service).month_event_cap, 3);
    }
}
