//! Day cell rendering for the month view.
//!
//! Renders one cell with its event chips and the "+N more" line, and turns
//! pointer input into a [`CalendarAction`]. A hit on a chip never selects
//! the day underneath it.

use chrono::NaiveDate;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::event_chip::{event_tooltip, hit_test, paint_event_chip};
use super::month_view::{MonthView, CHIP_HEIGHT, CHIP_SPACING, DAY_NUMBER_HEIGHT, MORE_HEIGHT};
use super::palette::CalendarCellPalette;
use super::CalendarAction;
use crate::models::day_cell::{CellEntry, DayCell};
use crate::models::event::Event;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

/// What a pointer can land on inside a day cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellTarget {
    Event(Event),
    More,
}

/// Pointer input for one cell during one frame.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CellClick {
    pub pointer: Option<Pos2>,
    pub clicked: bool,
    pub double_clicked: bool,
}

/// Decide what a click inside a day cell means.
///
/// Chips swallow the click: a single or double click on one opens the event
/// and the day stays unselected. A double click on empty space starts a new
/// appointment; anything else selects the day.
pub(crate) fn resolve_cell_click(
    date: NaiveDate,
    click: CellClick,
    hitboxes: &[(Rect, CellTarget)],
) -> Option<CalendarAction> {
    if !click.clicked && !click.double_clicked {
        return None;
    }

    match hit_test(click.pointer, hitboxes) {
        Some(CellTarget::Event(event)) => Some(CalendarAction::OpenEvent(event.clone())),
        Some(CellTarget::More) => Some(CalendarAction::SelectDay(date)),
        None if click.double_clicked => Some(CalendarAction::AddEvent(date, None)),
        None => Some(CalendarAction::SelectDay(date)),
    }
}

impl MonthView {
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DayCell,
        is_selected: bool,
        theme: &CalendarTheme,
        palette: CalendarCellPalette,
        size: Vec2,
    ) -> Option<CalendarAction> {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click().union(Sense::hover()));
        let in_month = cell.is_current_month();

        // Background
        let bg_color = if cell.is_today {
            palette.today_bg
        } else if !in_month {
            palette.outside_bg
        } else if is_weekend(cell.date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        // Border
        let (border_width, border_color) = if is_selected {
            (2.0, palette.selected_border)
        } else if cell.is_today {
            (1.5, palette.today_border)
        } else {
            (1.0, palette.border)
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(border_width, border_color));

        if response.hovered() && !is_selected {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        let text_color = if in_month { palette.text } else { palette.muted_text };
        let day_font = if cell.is_today {
            egui::FontId::proportional(15.0)
        } else {
            egui::FontId::proportional(14.0)
        };
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            cell.day.to_string(),
            day_font,
            text_color,
        );

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));

        let mut hitboxes: Vec<(Rect, CellTarget)> = Vec::new();
        let mut y_offset = DAY_NUMBER_HEIGHT + 2.0;

        for entry in cell.schedule.entries() {
            match entry {
                CellEntry::Event(event) => {
                    let chip_rect = Rect::from_min_size(
                        Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                        Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
                    );
                    if chip_rect.bottom() > rect.bottom() {
                        break;
                    }
                    let hovered = response.hovered()
                        && pointer_pos.is_some_and(|pos| chip_rect.contains(pos));
                    paint_event_chip(ui, chip_rect, event, theme, 11.0, hovered);
                    hitboxes.push((chip_rect, CellTarget::Event(event.clone())));
                    y_offset += CHIP_HEIGHT + CHIP_SPACING;
                }
                CellEntry::Overflow(marker) => {
                    let more_rect = Rect::from_min_size(
                        Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                        Vec2::new(rect.width() - 6.0, MORE_HEIGHT),
                    );
                    let hovered = pointer_pos.is_some_and(|pos| more_rect.contains(pos));
                    if hovered {
                        let accent = palette.today_border;
                        ui.painter().rect_filled(
                            more_rect,
                            2.0,
                            Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 50),
                        );
                    }
                    ui.painter().text(
                        Pos2::new(more_rect.left() + 2.0, more_rect.top()),
                        egui::Align2::LEFT_TOP,
                        marker.label(),
                        egui::FontId::proportional(10.0),
                        if hovered { palette.text } else { palette.more_text },
                    );
                    hitboxes.push((more_rect, CellTarget::More));
                }
            }
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            match hit_test(pointer_pos, &hitboxes) {
                Some(CellTarget::Event(event)) => {
                    let tooltip = event_tooltip(event);
                    response.clone().on_hover_ui_at_pointer(|ui| {
                        ui.label(tooltip);
                    });
                }
                Some(CellTarget::More) => {
                    response.clone().on_hover_text("Click to see every appointment of this day");
                }
                None => {
                    response
                        .clone()
                        .on_hover_text("Click to select this day\nDouble-click to add an appointment");
                }
            }
        }

        resolve_cell_click(
            cell.date,
            CellClick {
                pointer: pointer_pos,
                clicked: response.clicked(),
                double_clicked: response.double_clicked(),
            },
            &hitboxes,
        )
    }
}
