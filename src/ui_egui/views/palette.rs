use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    /// Cells spilling over from the neighbouring months
    pub outside_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub more_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            outside_bg: blend(theme.calendar_background, theme.app_background, 0.6),
            border: theme.day_border,
            today_border: theme.today_border,
            selected_border: theme.selected_border,
            text: theme.text_primary,
            muted_text: theme.text_muted,
            more_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HeaderPalette {
    pub header_bg: Color32,
    pub weekend_header_bg: Color32,
    pub header_text: Color32,
    pub border: Color32,
    pub today_text: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        let factor = if theme.is_dark { 1.15 } else { 0.92 };
        let scale = |c: u8| ((c as f32 * factor).min(255.0)) as u8;
        let bg = theme.header_background;
        Self {
            header_bg: bg,
            weekend_header_bg: Color32::from_rgb(scale(bg.r()), scale(bg.g()), scale(bg.b())),
            header_text: theme.header_text,
            border: theme.day_border,
            today_text: theme.today_border,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub label_text: Color32,
    pub hover_overlay: Color32,
    pub now_line: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            hour_bg: blend(theme.calendar_background, theme.day_background, 0.4),
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            hour_line: with_alpha(theme.day_border, 220),
            label_text: theme.text_secondary,
            hover_overlay: with_alpha(theme.today_border, if theme.is_dark { 80 } else { 50 }),
            now_line: theme.now_marker,
        }
    }
}
