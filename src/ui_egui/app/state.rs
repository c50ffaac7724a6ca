use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::models::event::Event;
use crate::models::settings::ViewType;
use crate::ui_egui::views::CalendarHost;
use crate::utils::date::shift_month_preserving_day;

/// Everything the views need to know about where the user is, and where
/// their clicks end up.
#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    pub view: ViewType,
    /// Anchors the displayed month, week, day or year
    pub focal_date: NaiveDate,
    pub selected_day: Option<NaiveDate>,
    /// Event shown in the details panel
    pub open_event: Option<Event>,
    /// Day (and optional hour) a new appointment was requested for
    pub pending_add: Option<(NaiveDate, Option<NaiveTime>)>,
}

impl HostState {
    pub fn new(view: ViewType, today: NaiveDate) -> Self {
        Self {
            view,
            focal_date: today,
            selected_day: None,
            open_event: None,
            pending_add: None,
        }
    }

    pub fn focal_year(&self) -> i32 {
        self.focal_date.year()
    }

    /// Zero-based month of the focal date.
    pub fn focal_month_index(&self) -> i32 {
        self.focal_date.month0() as i32
    }

    pub fn set_view(&mut self, view: ViewType) {
        if self.view != view {
            log::debug!("Switching to {} view", view);
            self.view = view;
        }
    }

    pub fn take_pending_add(&mut self) -> Option<(NaiveDate, Option<NaiveTime>)> {
        self.pending_add.take()
    }
}

impl CalendarHost for HostState {
    fn on_select_day(&mut self, date: NaiveDate) {
        self.selected_day = Some(date);
        self.focal_date = date;
        self.open_event = None;
    }

    fn on_add_event(&mut self, date: NaiveDate, time: Option<NaiveTime>) {
        self.selected_day = Some(date);
        self.pending_add = Some((date, time));
    }

    fn on_event_click(&mut self, event: &Event) {
        self.open_event = Some(event.clone());
    }

    fn on_select_month(&mut self, month_index: u32) {
        let current = self.focal_date.month0() as i32;
        self.focal_date = shift_month_preserving_day(self.focal_date, month_index as i32 - current);
        self.view = ViewType::Month;
    }
}
