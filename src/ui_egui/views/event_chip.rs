//! Appointment chips shared by every view.
//!
//! A chip is a rounded bar filled with the status color and labelled with
//! the time and subject. Views record the rect of each chip they paint so a
//! pointer over a chip can take priority over the surrounding cell.

use egui::{Color32, FontId, Pos2, Rect, Stroke};

use crate::models::event::Event;
use crate::ui_egui::theme::CalendarTheme;

/// Most recently painted chip under `pointer`, if any.
pub(crate) fn hit_test<T>(pointer: Option<Pos2>, hitboxes: &[(Rect, T)]) -> Option<&T> {
    let pos = pointer?;
    hitboxes
        .iter()
        .rev()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, item)| item)
}

pub(crate) fn chip_label(event: &Event) -> String {
    format!("{} {}", event.time_label(), event.subject_name)
}

pub(crate) fn event_tooltip(event: &Event) -> String {
    let mut lines = vec![
        format!("{} · {}", event.time_label(), event.subject_name),
        format!("Status: {}", event.status.label()),
    ];
    if let Some(procedure) = &event.procedure {
        lines.push(format!("Procedure: {}", procedure));
    }
    if let Some(complaint) = &event.complaint {
        lines.push(format!("Complaint: {}", complaint));
    }
    if let Some(session) = event.session_label() {
        lines.push(format!("Session {}", session));
    }
    lines.join("\n")
}

/// Truncate text to fit within a given pixel width, using binary search
/// and appending "…" when truncation is needed.
pub(crate) fn truncate_single_line_to_width(
    ui: &egui::Ui,
    text: &str,
    font_id: &FontId,
    color: Color32,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure_width = |candidate: &str| {
        let layout_job =
            egui::text::LayoutJob::simple(candidate.to_string(), font_id.clone(), color, f32::INFINITY);
        ui.fonts(|f| f.layout_job(layout_job).size().x)
    };

    if measure_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    if measure_width(ellipsis) > max_width {
        return String::new();
    }

    let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = boundaries.len().saturating_sub(1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate = format!("{}{}", &text[..boundaries[mid]], ellipsis);
        if measure_width(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid.saturating_sub(1);
        }
    }

    if low == 0 {
        ellipsis.to_string()
    } else {
        format!("{}{}", &text[..boundaries[low]], ellipsis)
    }
}

/// Paint one chip into `rect`.
pub(crate) fn paint_event_chip(
    ui: &egui::Ui,
    rect: Rect,
    event: &Event,
    theme: &CalendarTheme,
    font_size: f32,
    hovered: bool,
) {
    let tag = event.color_tag();
    let fill = theme.tag_color(tag);
    let text_color = theme.tag_text_color(tag);

    ui.painter().rect_filled(rect, 3.0, fill);
    if hovered {
        ui.painter().rect_stroke(
            rect.expand(1.0),
            3.0,
            Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
        );
    }

    let font_id = FontId::proportional(font_size);
    let label =
        truncate_single_line_to_width(ui, &chip_label(event), &font_id, text_color, rect.width() - 6.0);
    ui.painter().text(
        Pos2::new(rect.left() + 3.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        font_id,
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventStatus;
    use chrono::NaiveTime;
    use egui::{pos2, vec2};

    #[test]
    fn test_hit_test_prefers_last_painted() {
        let boxes = vec![
            (Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 20.0)), "under"),
            (Rect::from_min_size(pos2(0.0, 10.0), vec2(100.0, 20.0)), "over"),
        ];
        assert_eq!(hit_test(Some(pos2(5.0, 15.0)), &boxes), Some(&"over"));
        assert_eq!(hit_test(Some(pos2(5.0, 5.0)), &boxes), Some(&"under"));
        assert_eq!(hit_test(Some(pos2(5.0, 50.0)), &boxes), None);
        assert_eq!(hit_test(None, &boxes), None);
    }

    #[test]
    fn test_tooltip_lists_metadata() {
        let event = Event::builder()
            .id("t")
            .time(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
            .subject_name("Ana Costa")
            .status(EventStatus::Confirmed)
            .procedure("Hydrotherapy")
            .session(3, 10)
            .build()
            .unwrap();

        let tooltip = event_tooltip(&event);
        assert!(tooltip.starts_with("14:30 · Ana Costa"));
        assert!(tooltip.contains("Status: Confirmed"));
        assert!(tooltip.contains("Procedure: Hydrotherapy"));
        assert!(tooltip.contains("Session 3/10"));
        assert!(!tooltip.contains("Complaint"));
        assert_eq!(chip_label(&event), "14:30 Ana Costa");
    }
}
