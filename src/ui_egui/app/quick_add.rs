//! "New appointment" dialog.
//!
//! Only the appointment store accepts writes; with sample data the dialog
//! explains that instead of offering a form.

use chrono::{NaiveDate, NaiveTime};

use super::CalendarApp;
use crate::models::error::ModelError;
use crate::models::event::{parse_time, Event, EventStatus};
use crate::utils::date::format_hhmm;

#[derive(Debug, Clone, PartialEq)]
pub struct QuickAddState {
    pub date: NaiveDate,
    pub time_text: String,
    pub subject: String,
    pub status: EventStatus,
    pub procedure: String,
    pub complaint: String,
    pub error: Option<String>,
}

impl QuickAddState {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        let time = time.unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default());
        Self {
            date,
            time_text: format_hhmm(time),
            subject: String::new(),
            status: EventStatus::Pending,
            procedure: String::new(),
            complaint: String::new(),
            error: None,
        }
    }

    /// Build the appointment described by the form. The id is assigned by
    /// the store on insert.
    pub fn to_event(&self) -> Result<Event, ModelError> {
        let mut builder = Event::builder()
            .time(parse_time(&self.time_text)?)
            .subject_name(self.subject.trim())
            .status(self.status);

        if !self.procedure.trim().is_empty() {
            builder = builder.procedure(self.procedure.trim());
        }
        if !self.complaint.trim().is_empty() {
            builder = builder.complaint(self.complaint.trim());
        }
        builder.build()
    }
}

enum QuickAddOutcome {
    Save,
    Cancel,
}

impl CalendarApp {
    pub(super) fn render_quick_add(&mut self, ctx: &egui::Context) {
        let Some(state) = self.quick_add.as_mut() else {
            return;
        };
        let store_backed = self.context.is_store_backed();
        let mut outcome = None;
        let mut open = true;

        egui::Window::new("New appointment")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(state.date.format("%A, %d %B %Y").to_string());
                ui.add_space(6.0);

                if !store_backed {
                    ui.label("The agenda is showing sample appointments, which are read-only.");
                    ui.label("Set data_source = \"database\" in config.toml to record appointments.");
                    ui.add_space(6.0);
                    if ui.button("Close").clicked() {
                        outcome = Some(QuickAddOutcome::Cancel);
                    }
                    return;
                }

                egui::Grid::new("quick_add_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Time");
                        ui.add(egui::TextEdit::singleline(&mut state.time_text).desired_width(60.0));
                        ui.end_row();

                        ui.label("Patient");
                        ui.text_edit_singleline(&mut state.subject);
                        ui.end_row();

                        ui.label("Status");
                        egui::ComboBox::from_id_source("quick_add_status")
                            .selected_text(state.status.label())
                            .show_ui(ui, |ui| {
                                for status in EventStatus::ALL {
                                    ui.selectable_value(&mut state.status, status, status.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Procedure");
                        ui.text_edit_singleline(&mut state.procedure);
                        ui.end_row();

                        ui.label("Complaint");
                        ui.text_edit_singleline(&mut state.complaint);
                        ui.end_row();
                    });

                if let Some(error) = &state.error {
                    ui.colored_label(egui::Color32::from_rgb(200, 60, 60), error);
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        outcome = Some(QuickAddOutcome::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(QuickAddOutcome::Cancel);
                    }
                });
            });

        if !open {
            outcome = Some(QuickAddOutcome::Cancel);
        }

        match outcome {
            Some(QuickAddOutcome::Save) => self.save_quick_add(),
            Some(QuickAddOutcome::Cancel) => self.quick_add = None,
            None => {}
        }
    }

    fn save_quick_add(&mut self) {
        let Some(state) = self.quick_add.as_mut() else {
            return;
        };

        let event = match state.to_event() {
            Ok(event) => event,
            Err(err) => {
                state.error = Some(err.to_string());
                return;
            }
        };

        match self.context.appointment_service().create(state.date, &event) {
            Ok(saved) => {
                log::info!("Created appointment {} on {}", saved.id, state.date);
                self.toast_manager
                    .success(format!("Appointment for {} saved", saved.subject_name));
                self.quick_add = None;
            }
            Err(err) => {
                log::error!("Failed to create appointment: {:#}", err);
                state.error = Some(format!("{:#}", err));
            }
        }
    }
}
