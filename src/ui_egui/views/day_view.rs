//! Single-day timeline.
//!
//! Hour rows with the day's appointments stacked inside the hour they start
//! in, plus a horizontal "now" line whose position comes from [`NowMarker`].

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use egui::{Pos2, Rect, Sense, Stroke, Vec2};

use super::event_chip::{event_tooltip, hit_test, truncate_single_line_to_width};
use super::palette::TimeGridPalette;
use super::week_view::{resolve_slot_click, TIME_LABEL_WIDTH};
use super::{bucket_by_hour, CalendarAction};
use crate::models::event::Event;
use crate::models::settings::NowMarker;
use crate::ui_egui::theme::CalendarTheme;

const MIN_ROW_HEIGHT: f32 = 44.0;
const CARD_HEIGHT: f32 = 34.0;
const CARD_SPACING: f32 = 3.0;

/// Time of day at which to draw the "now" line on `date`, if at all.
///
/// A live marker only shows on the real current day; a fixed one shows on
/// whatever day is displayed.
pub fn now_marker_time(marker: NowMarker, date: NaiveDate, now: NaiveDateTime) -> Option<NaiveTime> {
    match marker {
        NowMarker::Live if date != now.date() => None,
        other => other.resolve(now.time()),
    }
}

/// Vertical offset of `time` from the top of the first row, given the
/// height of every row. `None` when the time falls outside the rows.
pub fn marker_offset(time: NaiveTime, hours: &[u32], heights: &[f32]) -> Option<f32> {
    let index = hours.iter().position(|hour| *hour == time.hour())?;
    let above: f32 = heights.iter().take(index).sum();
    let within = heights.get(index)? * time.minute() as f32 / 60.0;
    Some(above + within)
}

fn row_height(depth: usize) -> f32 {
    (depth as f32 * (CARD_HEIGHT + CARD_SPACING) + 6.0).max(MIN_ROW_HEIGHT)
}

/// Result returned from day view
#[derive(Default)]
pub struct DayViewResult {
    pub action: Option<CalendarAction>,
}

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        date: NaiveDate,
        events: &[Event],
        hours: RangeInclusive<u32>,
        now_marker: Option<NaiveTime>,
        theme: &CalendarTheme,
    ) -> DayViewResult {
        let mut result = DayViewResult::default();
        let palette = TimeGridPalette::from_theme(theme);

        ui.heading(date.format("%A, %d %B %Y").to_string());
        ui.label(
            egui::RichText::new(format!("{} appointment(s)", events.len()))
                .color(theme.text_secondary),
        );
        ui.add_space(6.0);

        let buckets: BTreeMap<u32, Vec<&Event>> = bucket_by_hour(events, hours);
        let row_hours: Vec<u32> = buckets.keys().copied().collect();
        let heights: Vec<f32> = buckets.values().map(|b| row_height(b.len())).collect();

        egui::ScrollArea::vertical()
            .id_source("day_view_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                let top = ui.cursor().top();
                let col_width = (ui.available_width() - TIME_LABEL_WIDTH - 4.0).max(120.0);

                for ((hour, bucket), height) in buckets.iter().zip(&heights) {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.allocate_ui_with_layout(
                            Vec2::new(TIME_LABEL_WIDTH, *height),
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.add_space(5.0);
                                ui.label(
                                    egui::RichText::new(format!("{:02}:00", hour))
                                        .size(12.0)
                                        .color(palette.label_text),
                                );
                            },
                        );
                        ui.add_space(4.0);

                        let action = Self::render_hour(
                            ui,
                            date,
                            *hour,
                            bucket,
                            theme,
                            &palette,
                            Vec2::new(col_width, *height),
                        );
                        if action.is_some() {
                            result.action = action;
                        }
                    });
                }

                if let Some(time) = now_marker {
                    if let Some(offset) = marker_offset(time, &row_hours, &heights) {
                        let left = ui.min_rect().left() + TIME_LABEL_WIDTH + 4.0;
                        let y = top + offset;
                        let painter = ui.painter();
                        painter.circle_filled(egui::pos2(left - 4.0, y), 3.0, palette.now_line);
                        painter.line_segment(
                            [egui::pos2(left, y), egui::pos2(left + col_width, y)],
                            Stroke::new(2.0, palette.now_line),
                        );
                    }
                }
            });

        result
    }

    fn render_hour(
        ui: &mut egui::Ui,
        date: NaiveDate,
        hour: u32,
        events: &[&Event],
        theme: &CalendarTheme,
        palette: &TimeGridPalette,
        size: Vec2,
    ) -> Option<CalendarAction> {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        ui.painter().rect_filled(rect, 0.0, palette.hour_bg);
        ui.painter().line_segment(
            [rect.left_top(), rect.right_top()],
            Stroke::new(1.0, palette.hour_line),
        );

        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));

        let mut hitboxes: Vec<(Rect, Event)> = Vec::with_capacity(events.len());
        for (idx, event) in events.iter().enumerate() {
            let card = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + 3.0 + idx as f32 * (CARD_HEIGHT + CARD_SPACING)),
                Vec2::new(rect.width() - 6.0, CARD_HEIGHT),
            );
            Self::paint_card(ui, card, event, theme);
            hitboxes.push((card, (*event).clone()));
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

    fn paint_card(ui: &egui::Ui, card: Rect, event: &Event, theme: &CalendarTheme) {
        let tag = event.color_tag();
        let fill = theme.tag_color(tag);
        let text = theme.tag_text_color(tag);

        ui.painter().rect_filled(card, 4.0, fill);

        let title_font = egui::FontId::proportional(12.5);
        let title = format!("{}  {}", event.time_label(), event.subject_name);
        ui.painter().text(
            Pos2::new(card.left() + 6.0, card.top() + 3.0),
            egui::Align2::LEFT_TOP,
            truncate_single_line_to_width(ui, &title, &title_font, text, card.width() - 12.0),
            title_font,
            text,
        );

        let mut details = vec![event.status.label().to_string()];
        if let Some(procedure) = &event.procedure {
            details.push(procedure.clone());
        }
        if let Some(session) = event.session_label() {
            details.push(format!("session {}", session));
        }
        let detail_font = egui::FontId::proportional(10.5);
        ui.painter().text(
            Pos2::new(card.left() + 6.0, card.bottom() - 3.0),
            egui::Align2::LEFT_BOTTOM,
            truncate_single_line_to_width(
                ui,
                &details.join(" · "),
                &detail_font,
                text,
                card.width() - 12.0,
            ),
            detail_font,
            text,
        );
    }
}
