use crate::models::settings::{Settings, ViewType};
use crate::services::database::Database;
use anyhow::{anyhow, Context, Result};

use super::mapper::{row_to_settings, SETTINGS_COLUMNS};

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let sql = format!("SELECT {} FROM settings WHERE id = 1", SETTINGS_COLUMNS);
        let settings = self
            .db
            .connection()
            .query_row(&sql, [], row_to_settings)
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        self.db
            .connection()
            .execute(
                "UPDATE settings \
                 SET theme = ?1, \
                     current_view = ?2, \
                     month_event_cap = ?3, \
                     week_start_hour = ?4, \
                     week_end_hour = ?5, \
                     day_start_hour = ?6, \
                     day_end_hour = ?7, \
                     now_marker = ?8, \
                     updated_at = CURRENT_TIMESTAMP \
                 WHERE id = 1",
                (
                    &settings.theme,
                    &settings.current_view,
                    settings.month_event_cap,
                    settings.week_start_hour,
                    settings.week_end_hour,
                    settings.day_start_hour,
                    settings.day_end_hour,
                    &settings.now_marker,
                ),
            )
            .context("Failed to update settings")?;

        Ok(())
    }

    /// Persist only the active view.
    pub fn set_current_view(&self, view: ViewType) -> Result<()> {
        self.db
            .connection()
            .execute(
                "UPDATE settings SET current_view = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = 1",
                [view.as_str()],
            )
            .context("Failed to save current view")?;
        Ok(())
    }

    /// Reset to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}
