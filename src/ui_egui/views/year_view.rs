use chrono::NaiveDate;
use egui::{Pos2, Sense, Stroke, Vec2};

use super::month_view::DAY_NAMES;
use super::palette::{CalendarCellPalette, HeaderPalette};
use super::CalendarAction;
use crate::services::grid::{MiniCell, MiniMonth};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

const MONTHS_PER_ROW: usize = 4;
const MIN_CELL: f32 = 18.0;
const MAX_CELL: f32 = 30.0;

/// Side of one mini-calendar square for the space available to a month.
pub(super) fn mini_cell_size(month_width: f32) -> f32 {
    ((month_width - 6.0 * 2.0) / 7.0).clamp(MIN_CELL, MAX_CELL)
}

/// Result returned from year view
#[derive(Default)]
pub struct YearViewResult {
    pub action: Option<CalendarAction>,
}

pub struct YearView;

impl YearView {
    pub fn show(
        ui: &mut egui::Ui,
        months: &[MiniMonth],
        selected_day: Option<NaiveDate>,
        theme: &CalendarTheme,
    ) -> YearViewResult {
        let mut result = YearViewResult::default();
        let month_width =
            (ui.available_width() - 16.0 * (MONTHS_PER_ROW as f32 - 1.0)) / MONTHS_PER_ROW as f32;
        let cell = mini_cell_size(month_width);

        egui::ScrollArea::vertical()
            .id_source("year_view_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for row in months.chunks(MONTHS_PER_ROW) {
                    ui.horizontal_top(|ui| {
                        ui.spacing_mut().item_spacing.x = 16.0;
                        for month in row {
                            ui.vertical(|ui| {
                                ui.set_width(month_width);
                                if let Some(action) =
                                    Self::render_mini_month(ui, month, selected_day, theme, cell)
                                {
                                    result.action = Some(action);
                                }
                            });
                        }
                    });
                    ui.add_space(12.0);
                }
            });

        result
    }

    fn render_mini_month(
        ui: &mut egui::Ui,
        month: &MiniMonth,
        selected_day: Option<NaiveDate>,
        theme: &CalendarTheme,
        cell: f32,
    ) -> Option<CalendarAction> {
        let mut action = None;
        let header = HeaderPalette::from_theme(theme);
        let palette = CalendarCellPalette::from_theme(theme);

        let title_color = if month.contains_today() {
            header.today_text
        } else {
            header.header_text
        };
        let title = ui
            .add(
                egui::Label::new(
                    egui::RichText::new(month.first.format("%B").to_string())
                        .size(15.0)
                        .strong()
                        .color(title_color),
                )
                .sense(Sense::click()),
            )
            .on_hover_text("Open this month");
        if title.clicked() {
            action = Some(CalendarAction::SelectMonth(month.month_index));
        }

        ui.spacing_mut().item_spacing = Vec2::new(2.0, 2.0);

        ui.horizontal(|ui| {
            for name in DAY_NAMES {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(cell), Sense::hover());
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &name[..1],
                    egui::FontId::proportional(11.0),
                    theme.text_secondary,
                );
            }
        });

        for week in month.weeks() {
            ui.horizontal(|ui| {
                for mini in week {
                    let (rect, response) =
                        ui.allocate_exact_size(Vec2::splat(cell), Sense::click());
                    let MiniCell::Day { day, date, is_today } = *mini else {
                        continue;
                    };

                    let bg = if is_today {
                        palette.today_bg
                    } else if is_weekend(date) {
                        palette.weekend_bg
                    } else {
                        palette.regular_bg
                    };
                    ui.painter().rect_filled(rect, 3.0, bg);

                    if selected_day == Some(date) {
                        ui.painter()
                            .rect_stroke(rect, 3.0, Stroke::new(2.0, palette.selected_border));
                    } else if is_today {
                        ui.painter()
                            .rect_stroke(rect, 3.0, Stroke::new(1.5, palette.today_border));
                    } else if response.hovered() {
                        ui.painter()
                            .rect_stroke(rect, 3.0, Stroke::new(1.0, palette.hover_border));
                    }

                    ui.painter().text(
                        Pos2::new(rect.center().x, rect.center().y),
                        egui::Align2::CENTER_CENTER,
                        day.to_string(),
                        egui::FontId::proportional(11.0),
                        palette.text,
                    );

                    if response.clicked() {
                        action = Some(CalendarAction::SelectDay(date));
                    }
                }
            });
        }

        action
    }
}
