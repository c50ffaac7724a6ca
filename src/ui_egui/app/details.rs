//! Side panel with the opened appointment, or the full list of the
//! selected day when no appointment is open.

use egui::RichText;

use super::CalendarApp;
use crate::models::day_cell::DayEvents;
use crate::models::event::{Event, EventStatus};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{dispatch, CalendarAction};

enum DetailsAction {
    Close,
    SetStatus(i64, EventStatus),
    Delete(i64),
    Open(Event),
    Add,
}

impl CalendarApp {
    pub(super) fn render_details_panel(&mut self, ctx: &egui::Context) {
        if self.host.open_event.is_none() && self.host.selected_day.is_none() {
            return;
        }

        let mut action = None;
        let store_backed = self.context.is_store_backed();

        egui::SidePanel::right("details_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                if let Some(event) = &self.host.open_event {
                    action = Self::render_event_details(ui, event, store_backed, &self.active_theme);
                } else if let Some(day) = self.host.selected_day {
                    ui.heading(day.format("%A, %d %B").to_string());
                    ui.separator();

                    let schedule = DayEvents::uncapped(self.context.source().events_for_day(day));
                    if schedule.is_empty() {
                        ui.label(
                            RichText::new("No appointments").color(self.active_theme.text_secondary),
                        );
                    }
                    for event in &schedule.events {
                        let color = self.active_theme.tag_color(event.color_tag());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("●").color(color));
                            let text = format!("{}  {}", event.time_label(), event.subject_name);
                            if ui.link(text).clicked() {
                                action = Some(DetailsAction::Open(event.clone()));
                            }
                        });
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("New appointment").clicked() {
                            action = Some(DetailsAction::Add);
                        }
                        if ui.button("Close").clicked() {
                            action = Some(DetailsAction::Close);
                        }
                    });
                }
            });

        match action {
            Some(DetailsAction::Close) => {
                self.host.open_event = None;
                self.host.selected_day = None;
            }
            Some(DetailsAction::SetStatus(id, status)) => self.update_status(id, status),
            Some(DetailsAction::Delete(id)) => self.delete_appointment(id),
            Some(DetailsAction::Open(event)) => {
                dispatch(&mut self.host, CalendarAction::OpenEvent(event));
            }
            Some(DetailsAction::Add) => {
                if let Some(day) = self.host.selected_day {
                    dispatch(&mut self.host, CalendarAction::AddEvent(day, None));
                }
            }
            None => {}
        }
    }

    fn render_event_details(
        ui: &mut egui::Ui,
        event: &Event,
        store_backed: bool,
        theme: &CalendarTheme,
    ) -> Option<DetailsAction> {
        let mut action = None;

        ui.heading(event.subject_name.as_str());
        ui.label(
            RichText::new(format!("{} · {}", event.time_label(), event.status.label()))
                .color(theme.tag_color(event.color_tag())),
        );
        ui.separator();

        egui::Grid::new("event_details_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                if let Some(procedure) = &event.procedure {
                    ui.label("Procedure");
                    ui.label(procedure.as_str());
                    ui.end_row();
                }
                if let Some(complaint) = &event.complaint {
                    ui.label("Complaint");
                    ui.label(complaint.as_str());
                    ui.end_row();
                }
                if let Some(session) = event.session_label() {
                    ui.label("Session");
                    ui.label(session);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        match event.id.parse::<i64>() {
            Ok(id) if store_backed => {
                ui.label("Mark as");
                ui.horizontal_wrapped(|ui| {
                    for status in EventStatus::ALL {
                        let button = egui::Button::new(status.label())
                            .fill(theme.tag_color(status.color_tag()).gamma_multiply(0.6));
                        if ui.add_enabled(status != event.status, button).clicked() {
                            action = Some(DetailsAction::SetStatus(id, status));
                        }
                    }
                });
                ui.add_space(6.0);
                if ui.button("Delete appointment").clicked() {
                    action = Some(DetailsAction::Delete(id));
                }
            }
            _ => {
                ui.label(
                    RichText::new("Sample appointment (read-only)")
                        .italics()
                        .color(theme.text_secondary),
                );
            }
        }

        ui.add_space(8.0);
        if ui.button("Close").clicked() {
            action = Some(DetailsAction::Close);
        }
        action
    }

    fn update_status(&mut self, id: i64, status: EventStatus) {
        match self.context.appointment_service().update_status(id, status) {
            Ok(true) => {
                if let Some(event) = self.host.open_event.as_mut() {
                    event.status = status;
                }
                self.toast_manager.success(format!("Marked as {}", status.label()));
            }
            Ok(false) => self.toast_manager.error("Appointment no longer exists"),
            Err(err) => {
                log::error!("Failed to update appointment {}: {:#}", id, err);
                self.toast_manager.error("Could not update the appointment");
            }
        }
    }

    fn delete_appointment(&mut self, id: i64) {
        match self.context.appointment_service().delete(id) {
            Ok(_) => {
                self.host.open_event = None;
                self.toast_manager.info("Appointment deleted");
            }
            Err(err) => {
                log::error!("Failed to delete appointment {}: {:#}", id, err);
                self.toast_manager.error("Could not delete the appointment");
            }
        }
    }
}
