use crate::models::settings::{NowMarker, Settings};
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::utils::date::format_hhmm;
use egui::{Color32, RichText};

const THEMES: [(&str, &str); 3] = [("light", "Light"), ("dark", "Dark"), ("system", "Follow system")];

/// How the day timeline draws the "now" line, as picked in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMode {
    Live,
    Fixed,
    Hidden,
}

/// Editable copy of the settings; nothing is persisted until Save.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub settings: Settings,
    pub marker_mode: MarkerMode,
    /// `HH:MM` used when the marker is fixed
    pub fixed_time: String,
    pub error: Option<String>,
}

impl SettingsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        let (marker_mode, fixed_time) = match settings.now_marker() {
            NowMarker::Live => (MarkerMode::Live, "12:00".to_string()),
            NowMarker::Fixed(time) => (MarkerMode::Fixed, format_hhmm(time)),
            NowMarker::Hidden => (MarkerMode::Hidden, "12:00".to_string()),
        };
        Self {
            settings: settings.clone(),
            marker_mode,
            fixed_time,
            error: None,
        }
    }

    /// Settings ready for [`SettingsService::update`], or the reason they
    /// cannot be saved.
    pub fn to_settings(&self) -> Result<Settings, String> {
        let marker = match self.marker_mode {
            MarkerMode::Live => NowMarker::Live,
            MarkerMode::Hidden => NowMarker::Hidden,
            MarkerMode::Fixed => format!("fixed:{}", self.fixed_time.trim())
                .parse::<NowMarker>()
                .map_err(|_| format!("Invalid marker time '{}' (use HH:MM)", self.fixed_time))?,
        };

        let mut settings = self.settings.clone();
        settings.now_marker = marker.to_string();
        settings.validate()?;
        Ok(settings)
    }

    /// Defaults, keeping the view the user is on.
    pub fn reset(&mut self) {
        let current_view = self.settings.current_view.clone();
        *self = Self::from_settings(&Settings {
            current_view,
            ..Settings::default()
        });
    }
}

pub struct SettingsDialogResponse {
    /// Persisted settings when Save succeeded
    pub saved: Option<Settings>,
    /// The window should go away (saved, cancelled or closed)
    pub closed: bool,
}

/// Render the settings dialog
pub fn render_settings_dialog(
    ctx: &egui::Context,
    draft: &mut SettingsDraft,
    database: &Database,
) -> SettingsDialogResponse {
    let mut saved = None;
    let mut closed = false;
    let mut dialog_open = true;

    egui::Window::new("Settings")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = draft.error {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            let label_width = 160.0;
            let row_label = |ui: &mut egui::Ui, text: &str| {
                ui.allocate_ui_with_layout(
                    egui::Vec2::new(label_width, 20.0),
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.label(text);
                    },
                );
            };

            ui.heading("Appearance");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                row_label(ui, "Theme:");
                let selected = THEMES
                    .iter()
                    .find(|(key, _)| *key == draft.settings.theme)
                    .map(|(_, label)| *label)
                    .unwrap_or("Light");
                egui::ComboBox::from_id_source("theme_combo")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (key, label) in THEMES {
                            ui.selectable_value(&mut draft.settings.theme, key.to_string(), label);
                        }
                    });
            });

            ui.add_space(8.0);
            ui.heading("Month");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                row_label(ui, "Appointments per day:");
                ui.add(
                    egui::DragValue::new(&mut draft.settings.month_event_cap)
                        .range(1..=12)
                        .speed(0.1),
                );
            });

            ui.add_space(8.0);
            ui.heading("Week and day hours");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                row_label(ui, "Week:");
                hour_range(ui, &mut draft.settings.week_start_hour, &mut draft.settings.week_end_hour);
            });
            ui.horizontal(|ui| {
                row_label(ui, "Day:");
                hour_range(ui, &mut draft.settings.day_start_hour, &mut draft.settings.day_end_hour);
            });

            ui.add_space(8.0);
            ui.heading("Current time line");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                row_label(ui, "Show:");
                ui.radio_value(&mut draft.marker_mode, MarkerMode::Live, "Live");
                ui.radio_value(&mut draft.marker_mode, MarkerMode::Fixed, "Fixed at");
                ui.add_enabled(
                    draft.marker_mode == MarkerMode::Fixed,
                    egui::TextEdit::singleline(&mut draft.fixed_time).desired_width(50.0),
                );
                ui.radio_value(&mut draft.marker_mode, MarkerMode::Hidden, "Hidden");
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    match draft.to_settings() {
                        Ok(settings) => match SettingsService::new(database).update(&settings) {
                            Ok(()) => {
                                log::info!("Saved settings");
                                saved = Some(settings);
                                closed = true;
                            }
                            Err(e) => {
                                log::error!("Failed to save settings: {:#}", e);
                                draft.error = Some(format!("Failed to save settings: {}", e));
                            }
                        },
                        Err(reason) => draft.error = Some(reason),
                    }
                }

                if ui.button("✖ Cancel").clicked() {
                    closed = true;
                }

                ui.add_space(20.0);

                if ui
                    .button(RichText::new("↺ Reset to Defaults").color(Color32::LIGHT_BLUE))
                    .clicked()
                {
                    draft.reset();
                }
            });
        });

    if !dialog_open {
        closed = true;
    }

    SettingsDialogResponse { saved, closed }
}

fn hour_range(ui: &mut egui::Ui, start: &mut u32, end: &mut u32) {
    ui.add(egui::DragValue::new(start).range(0..=23).suffix(":00"));
    ui.label("to");
    ui.add(egui::DragValue::new(end).range(1..=24).suffix(":00"));
    if *start >= *end {
        ui.colored_label(Color32::LIGHT_RED, "⚠ start must be before end");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_draft_reads_fixed_marker() {
        let settings = Settings {
            now_marker: "fixed:10:40".to_string(),
            ..Settings::default()
        };
        let draft = SettingsDraft::from_settings(&settings);
        assert_eq!(draft.marker_mode, MarkerMode::Fixed);
        assert_eq!(draft.fixed_time, "10:40");
    }

    #[test]
    fn test_draft_writes_marker_and_fields() {
        let mut draft = SettingsDraft::from_settings(&Settings::default());
        draft.settings.month_event_cap = 3;
        draft.settings.theme = "dark".to_string();
        draft.marker_mode = MarkerMode::Fixed;
        draft.fixed_time = " 08:15 ".to_string();

        let settings = draft.to_settings().unwrap();
        assert_eq!(settings.month_event_cap, 3);
        assert_eq!(settings.theme, "dark");
        assert_eq!(
            settings.now_marker(),
            NowMarker::Fixed(NaiveTime::from_hms_opt(8, 15, 0).unwrap())
        );

        draft.marker_mode = MarkerMode::Hidden;
        assert_eq!(draft.to_settings().unwrap().now_marker(), NowMarker::Hidden);
    }

    #[test]
    fn test_draft_rejects_bad_time_and_hours() {
        let mut draft = SettingsDraft::from_settings(&Settings::default());
        draft.marker_mode = MarkerMode::Fixed;
        draft.fixed_time = "25:00".to_string();
        assert!(draft.to_settings().is_err());

        draft.marker_mode = MarkerMode::Live;
        draft.settings.week_start_hour = 21;
        draft.settings.week_end_hour = 7;
        assert!(draft.to_settings().is_err());
    }

    #[test]
    fn test_reset_keeps_current_view() {
        let mut draft = SettingsDraft::from_settings(&Settings {
            current_view: "Week".to_string(),
            month_event_cap: 9,
            ..Settings::default()
        });
        draft.error = Some("stale".to_string());
        draft.reset();

        assert_eq!(draft.settings.current_view, "Week");
        assert_eq!(draft.settings.month_event_cap, 5);
        assert_eq!(draft.error, None);
    }

    #[test]
    fn test_saved_draft_persists_through_service() {
        let db = Database::in_memory().unwrap();
        let mut draft = SettingsDraft::from_settings(&Settings::default());
        draft.settings.day_start_hour = 8;
        draft.marker_mode = MarkerMode::Hidden;

        let settings = draft.to_settings().unwrap();
        let service = SettingsService::new(&db);
        service.update(&settings).unwrap();

        let loaded = service.get().unwrap();
        assert_eq!(loaded.day_start_hour, 8);
        assert_eq!(loaded.now_marker(), NowMarker::Hidden);
    }
}
