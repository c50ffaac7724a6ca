//! Theme module for the agenda views
//!
//! Defines the CalendarTheme structure and the chip colors used for each
//! appointment color tag.

use egui::Color32;

use crate::models::event::ColorTag;

/// All colors used by the calendar views
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    pub calendar_background: Color32,
    pub weekend_background: Color32,
    pub today_background: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub day_background: Color32,
    pub day_border: Color32,
    pub header_background: Color32,
    pub header_text: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    /// Day numbers of cells outside the focal month
    pub text_muted: Color32,
    pub now_marker: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_border: Color32::from_rgb(30, 120, 90),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(235, 238, 243),
            header_text: Color32::from_rgb(50, 55, 65),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            text_muted: Color32::from_rgb(175, 175, 175),
            now_marker: Color32::from_rgb(230, 70, 70),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_border: Color32::from_rgb(80, 200, 150),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 50, 56),
            header_text: Color32::from_rgb(225, 228, 235),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            text_muted: Color32::from_rgb(100, 100, 100),
            now_marker: Color32::from_rgb(255, 100, 100),
        }
    }

    /// Resolve a persisted theme preference ("light", "dark" or "system").
    pub fn from_preference(preference: &str) -> Self {
        match preference {
            "dark" => Self::dark(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
            _ => Self::light(),
        }
    }

    /// Fill color for an appointment chip.
    pub fn tag_color(&self, tag: ColorTag) -> Color32 {
        match tag {
            ColorTag::Yellow => Color32::from_rgb(242, 193, 46),
            ColorTag::Red => Color32::from_rgb(220, 68, 68),
            ColorTag::Black => {
                if self.is_dark {
                    Color32::from_rgb(90, 90, 96)
                } else {
                    Color32::from_rgb(45, 45, 50)
                }
            }
            ColorTag::Cyan => Color32::from_rgb(38, 182, 201),
            ColorTag::Gray => Color32::from_rgb(150, 150, 155),
        }
    }

    /// Readable text color on top of [`Self::tag_color`].
    pub fn tag_text_color(&self, tag: ColorTag) -> Color32 {
        match tag {
            ColorTag::Yellow | ColorTag::Cyan | ColorTag::Gray => Color32::from_rgb(25, 25, 25),
            ColorTag::Red | ColorTag::Black => Color32::WHITE,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
