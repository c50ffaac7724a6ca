//! Short-lived feedback messages ("Appointment saved", "Sample data is read-only").

use crate::models::event::ColorTag;
use crate::ui_egui::theme::CalendarTheme;
use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

/// Older toasts are dropped past this many.
const MAX_VISIBLE: usize = 4;
const TOAST_WIDTH: f32 = 300.0;
const TOAST_HEIGHT: f32 = 40.0;
const MARGIN: f32 = 10.0;
const GAP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    /// Stripe and icon colour, shared with the appointment status tags.
    pub fn accent(&self, theme: &CalendarTheme) -> Color32 {
        match self {
            ToastLevel::Success => theme.tag_color(ColorTag::Cyan),
            ToastLevel::Info => theme.today_border,
            ToastLevel::Error => theme.tag_color(ColorTag::Red),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fades out over the last half second.
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            ((self.duration - elapsed).as_secs_f32() / 0.5).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastLevel::Error));
    }

    /// Repeating a visible message restarts it instead of stacking a copy.
    fn push(&mut self, toast: Toast) {
        self.toasts
            .retain(|t| !(t.level == toast.level && t.message == toast.message));
        self.toasts.push(toast);
        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..excess);
        }
    }

    pub fn render(&mut self, ctx: &Context, theme: &CalendarTheme) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();

        // Newest sits at the bottom
        for (slot, toast) in self.toasts.iter().rev().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let pos = Pos2::new(
                screen_rect.right() - TOAST_WIDTH - MARGIN,
                screen_rect.bottom() - MARGIN - (slot + 1) as f32 * TOAST_HEIGHT - slot as f32 * GAP,
            );

            let accent = toast.level.accent(theme).gamma_multiply(opacity);
            let fill = theme.calendar_background.gamma_multiply(0.95 * opacity);
            let text = theme.text_primary.gamma_multiply(opacity);

            egui::Area::new(egui::Id::new(("toast", slot)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(accent).strong());
                                ui.label(RichText::new(&toast.message).color(text));
                            });
                        });
                });
        }
    }
}
