use chrono::{Datelike, Local};

use super::super::CalendarApp;
use crate::models::day_cell::DayEvents;
use crate::models::settings::ViewType;
use crate::services::config::DataSourceKind;
use crate::services::grid::{build_month_grid, week_dates, year_overview};
use crate::ui_egui::views::day_view::{now_marker_time, DayView};
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::week_view::{WeekLayout, WeekView};
use crate::ui_egui::views::year_view::YearView;
use crate::ui_egui::views::{dispatch, hour_rows, CalendarAction};

impl CalendarApp {
    pub(in crate::ui_egui::app) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous (← Arrow)").clicked() {
                    self.host.navigate_previous();
                }
                if ui.button("Today").on_hover_text("Press T").clicked() {
                    self.host.jump_to_today(Local::now().date_naive());
                }
                if ui.button("▶").on_hover_text("Next (→ Arrow)").clicked() {
                    self.host.navigate_next();
                }

                ui.separator();
                ui.heading(self.host.period_label());
                ui.separator();

                for view in ViewType::ALL {
                    if ui.selectable_label(self.host.view == view, view.as_str()).clicked() {
                        self.host.set_view(view);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.open_settings();
                    }
                    let source_label = match self.context.config().data_source {
                        DataSourceKind::Sample => "Sample data",
                        DataSourceKind::Database => "Appointment store",
                    };
                    ui.label(
                        egui::RichText::new(source_label)
                            .small()
                            .color(self.active_theme.text_secondary),
                    );
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(in crate::ui_egui::app) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .outer_margin(egui::Margin::ZERO)
            .inner_margin(egui::Margin::same(8.0))
            .fill(self.active_theme.app_background);

        let mut action = None;
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                action = match self.host.view {
                    ViewType::Month => self.render_month_view(ui),
                    ViewType::Week => self.render_week_view(ui),
                    ViewType::Day => self.render_day_view(ui),
                    ViewType::Year => self.render_year_view(ui),
                };
            });

        if let Some(action) = action {
            dispatch(&mut self.host, action);
        }
    }

    fn render_month_view(&self, ui: &mut egui::Ui) -> Option<CalendarAction> {
        let today = Local::now().date_naive();
        let cap = self.settings.month_event_cap as usize;
        let cells = build_month_grid(
            self.host.focal_year(),
            self.host.focal_month_index(),
            today,
            self.context.source(),
            cap,
        );

        MonthView::show(ui, &cells, self.host.selected_day, cap, &self.active_theme).action
    }

    fn render_week_view(&self, ui: &mut egui::Ui) -> Option<CalendarAction> {
        let today = Local::now().date_naive();
        let dates = week_dates(self.host.focal_date);
        let events = self.context.source().events_in_range(dates[0], dates[6]);
        let hours = hour_rows(self.settings.week_start_hour, self.settings.week_end_hour);
        let layout = WeekLayout::new(self.host.focal_date, &events, hours);

        WeekView::show(ui, &layout, today, self.host.selected_day, &self.active_theme).action
    }

    fn render_day_view(&self, ui: &mut egui::Ui) -> Option<CalendarAction> {
        let date = self.host.focal_date;
        let schedule = DayEvents::uncapped(self.context.source().events_for_day(date));
        let hours = hour_rows(self.settings.day_start_hour, self.settings.day_end_hour);
        let marker = now_marker_time(
            self.settings.now_marker(),
            date,
            Local::now().naive_local(),
        );

        DayView::show(ui, date, &schedule.events, hours, marker, &self.active_theme).action
    }

    fn render_year_view(&self, ui: &mut egui::Ui) -> Option<CalendarAction> {
        let today = Local::now().date_naive();
        let months = year_overview(self.host.focal_date.year(), today);

        YearView::show(ui, &months, self.host.selected_day, &self.active_theme).action
    }
}
