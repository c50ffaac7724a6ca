use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};
use egui::{Margin, Pos2, Rect, Sense, Stroke, Vec2};

use super::event_chip::{event_tooltip, hit_test, paint_event_chip};
use super::month_view::DAY_NAMES;
use super::palette::{HeaderPalette, TimeGridPalette};
use super::{bucket_by_hour, CalendarAction};
use crate::models::event::Event;
use crate::services::grid::week_dates;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

pub(super) const TIME_LABEL_WIDTH: f32 = 50.0;
const COLUMN_SPACING: f32 = 2.0;
const MIN_ROW_HEIGHT: f32 = 36.0;
const CHIP_HEIGHT: f32 = 16.0;
const CHIP_SPACING: f32 = 2.0;

/// One hour across the seven days of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub hour: u32,
    pub days: [Vec<Event>; 7],
}

impl HourRow {
    /// Most events stacked in any single day of this hour.
    pub fn depth(&self) -> usize {
        self.days.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Monday-first week with its events bucketed by hour and day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub dates: [NaiveDate; 7],
    pub rows: Vec<HourRow>,
}

impl WeekLayout {
    /// Lay out the week containing `focal`. Days missing from `events` are
    /// treated as empty.
    pub fn new(
        focal: NaiveDate,
        events: &BTreeMap<NaiveDate, Vec<Event>>,
        hours: RangeInclusive<u32>,
    ) -> Self {
        let dates = week_dates(focal);
        let per_day: Vec<BTreeMap<u32, Vec<&Event>>> = dates
            .iter()
            .map(|date| {
                let day_events = events.get(date).map(Vec::as_slice).unwrap_or(&[]);
                bucket_by_hour(day_events, hours.clone())
            })
            .collect();

        let rows = hours
            .map(|hour| HourRow {
                hour,
                days: std::array::from_fn(|idx| {
                    per_day[idx]
                        .get(&hour)
                        .map(|bucket| bucket.iter().map(|e| (*e).clone()).collect())
                        .unwrap_or_default()
                }),
            })
            .collect();

        Self { dates, rows }
    }

    pub fn event_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.days.iter())
            .map(Vec::len)
            .sum()
    }
}

pub(super) fn row_height(depth: usize) -> f32 {
    (depth as f32 * (CHIP_HEIGHT + CHIP_SPACING) + 4.0).max(MIN_ROW_HEIGHT)
}

/// Resolve a click on an hour slot. Chips open their event; a double click
/// on empty space adds an appointment at the top of the hour.
pub(super) fn resolve_slot_click(
    date: NaiveDate,
    hour: u32,
    pointer: Option<Pos2>,
    clicked: bool,
    double_clicked: bool,
    hitboxes: &[(Rect, Event)],
) -> Option<CalendarAction> {
    if !clicked && !double_clicked {
        return None;
    }
    if let Some(event) = hit_test(pointer, hitboxes) {
        return Some(CalendarAction::OpenEvent(event.clone()));
    }
    if double_clicked {
        Some(CalendarAction::AddEvent(date, NaiveTime::from_hms_opt(hour, 0, 0)))
    } else {
        Some(CalendarAction::SelectDay(date))
    }
}

/// Result returned from week view
#[derive(Default)]
pub struct WeekViewResult {
    pub action: Option<CalendarAction>,
}

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        layout: &WeekLayout,
        today: NaiveDate,
        selected_day: Option<NaiveDate>,
        theme: &CalendarTheme,
    ) -> WeekViewResult {
        let mut result = WeekViewResult::default();

        let available_for_cols = ui.available_width() - TIME_LABEL_WIDTH - COLUMN_SPACING * 7.0;
        let col_width = (available_for_cols / 7.0).max(60.0);

        if let Some(action) = Self::render_header(ui, layout, today, selected_day, theme, col_width) {
            result.action = Some(action);
        }

        ui.add_space(4.0);

        let palette = TimeGridPalette::from_theme(theme);
        egui::ScrollArea::vertical()
            .id_source("week_view_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                for row in &layout.rows {
                    let height = row_height(row.depth());
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;

                        ui.allocate_ui_with_layout(
                            Vec2::new(TIME_LABEL_WIDTH, height),
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.add_space(5.0);
                                ui.label(
                                    egui::RichText::new(format!("{:02}:00", row.hour))
                                        .size(12.0)
                                        .color(palette.label_text),
                                );
                            },
                        );

                        for (idx, date) in layout.dates.iter().enumerate() {
                            ui.add_space(COLUMN_SPACING);
                            let action = Self::render_slot(
                                ui,
                                *date,
                                row.hour,
                                &row.days[idx],
                                *date == today,
                                theme,
                                &palette,
                                Vec2::new(col_width, height),
                            );
                            if action.is_some() {
                                result.action = action;
                            }
                        }
                    });
                }
            });

        result
    }

    fn render_header(
        ui: &mut egui::Ui,
        layout: &WeekLayout,
        today: NaiveDate,
        selected_day: Option<NaiveDate>,
        theme: &CalendarTheme,
        col_width: f32,
    ) -> Option<CalendarAction> {
        let header = HeaderPalette::from_theme(theme);
        let mut action = None;

        egui::Frame::none()
            .fill(header.header_bg)
            .rounding(egui::Rounding::same(10.0))
            .stroke(Stroke::new(1.0, header.border))
            .inner_margin(Margin {
                left: 0.0,
                right: 0.0,
                top: 8.0,
                bottom: 8.0,
            })
            .show(ui, |strip_ui| {
                strip_ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.add_space(TIME_LABEL_WIDTH);

                    for (idx, date) in layout.dates.iter().enumerate() {
                        ui.add_space(COLUMN_SPACING);
                        let is_today = *date == today;
                        let is_selected = selected_day == Some(*date);
                        let color = if is_today {
                            header.today_text
                        } else {
                            header.header_text
                        };

                        let (rect, response) =
                            ui.allocate_exact_size(Vec2::new(col_width, 40.0), Sense::click());
                        if is_selected {
                            ui.painter()
                                .rect_stroke(rect, 6.0, Stroke::new(2.0, theme.selected_border));
                        } else if idx >= 5 {
                            ui.painter().rect_filled(rect, 6.0, header.weekend_header_bg);
                        }
                        ui.painter().text(
                            Pos2::new(rect.center().x, rect.top() + 11.0),
                            egui::Align2::CENTER_CENTER,
                            DAY_NAMES[idx],
                            egui::FontId::proportional(12.0),
                            color,
                        );
                        ui.painter().text(
                            Pos2::new(rect.center().x, rect.top() + 28.0),
                            egui::Align2::CENTER_CENTER,
                            date.format("%d/%m").to_string(),
                            egui::FontId::proportional(11.0),
                            color,
                        );

                        if response.clicked() {
                            action = Some(CalendarAction::SelectDay(*date));
                        }
                    }
                });
            });

        action
    }

    #[allow(clippy::too_many_arguments)]
    fn render_slot(
        ui: &mut egui::Ui,
        date: NaiveDate,
        hour: u32,
        events: &[Event],
        is_today: bool,
        theme: &CalendarTheme,
        palette: &TimeGridPalette,
        size: Vec2,
    ) -> Option<CalendarAction> {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let bg = if is_today {
            palette.today_bg
        } else if is_weekend(date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 0.0, bg);
        ui.painter().line_segment(
            [rect.left_top(), rect.right_top()],
            Stroke::new(1.0, palette.hour_line),
        );

        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));

        let mut hitboxes: Vec<(Rect, Event)> = Vec::with_capacity(events.len());
        for (idx, event) in events.iter().enumerate() {
            let chip_rect = Rect::from_min_size(
                Pos2::new(
                    rect.left() + 2.0,
                    rect.top() + 2.0 + idx as f32 * (CHIP_HEIGHT + CHIP_SPACING),
                ),
                Vec2::new(rect.width() - 4.0, CHIP_HEIGHT),
            );
            let hovered = response.hovered() && pointer.is_some_and(|pos| chip_rect.contains(pos));
            paint_event_chip(ui, chip_rect, event, theme, 10.5, hovered);
            hitboxes.push((chip_rect, event.clone()));
        }

        if response.hovered() {
            if let Some(event) = hit_test(pointer, &hitboxes) {
                let tooltip = event_tooltip(event);
                response.clone().on_hover_ui_at_pointer(|ui| {
                    ui.label(tooltip);
                });
            } else {
                ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
            }
        }

        resolve_slot_click(
            date,
            hour,
            pointer,
            response.clicked(),
            response.double_clicked(),
            &hitboxes,
        )
    }
}
