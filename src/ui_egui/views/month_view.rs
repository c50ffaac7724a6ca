use egui::{Margin, Stroke, Vec2};

use super::palette::{CalendarCellPalette, HeaderPalette};
use super::CalendarAction;
use crate::models::day_cell::DayCell;
use crate::ui_egui::theme::CalendarTheme;
use chrono::NaiveDate;

pub(super) const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(super) const DAY_NUMBER_HEIGHT: f32 = 22.0;
pub(super) const CHIP_HEIGHT: f32 = 16.0;
pub(super) const CHIP_SPACING: f32 = 2.0;
pub(super) const MORE_HEIGHT: f32 = 14.0;

/// Result returned from month view
#[derive(Default)]
pub struct MonthViewResult {
    pub action: Option<CalendarAction>,
}

pub struct MonthView;

impl MonthView {
    /// Paint a 42-cell grid produced by the grid generator.
    ///
    /// `cap` is only used to size the rows; the cells already carry their
    /// capped events and overflow markers.
    pub fn show(
        ui: &mut egui::Ui,
        cells: &[DayCell],
        selected_day: Option<NaiveDate>,
        cap: usize,
        theme: &CalendarTheme,
    ) -> MonthViewResult {
        let mut result = MonthViewResult::default();

        let spacing = 2.0;
        let col_width = ((ui.available_width() - spacing * 6.0) / 7.0).max(40.0);

        Self::render_header(ui, theme, col_width, spacing);

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        let rows = cells.len().div_ceil(7).max(1);
        let min_height = Self::min_cell_height(cap);
        let row_height = ((ui.available_height() - spacing * (rows as f32 - 1.0)) / rows as f32)
            .max(min_height);

        let palette = CalendarCellPalette::from_theme(theme);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for week in cells.chunks(7) {
                    for cell in week {
                        let is_selected = selected_day == Some(cell.date);
                        let cell_action = Self::render_day_cell(
                            ui,
                            cell,
                            is_selected,
                            theme,
                            palette,
                            Vec2::new(col_width, row_height),
                        );
                        if cell_action.is_some() {
                            result.action = cell_action;
                        }
                    }
                    ui.end_row();
                }
            });

        result
    }

    /// Tall enough for `cap` chips plus the overflow line.
    pub fn min_cell_height(cap: usize) -> f32 {
        DAY_NUMBER_HEIGHT + cap as f32 * (CHIP_HEIGHT + CHIP_SPACING) + MORE_HEIGHT + 4.0
    }

    fn render_header(ui: &mut egui::Ui, theme: &CalendarTheme, col_width: f32, spacing: f32) {
        let header = HeaderPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (idx, day) in DAY_NAMES.iter().enumerate() {
                    let header_bg = if idx >= 5 {
                        header.weekend_header_bg
                    } else {
                        header.header_bg
                    };

                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 30.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, header.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(*day)
                                                .size(14.0)
                                                .color(header.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });
    }
}
