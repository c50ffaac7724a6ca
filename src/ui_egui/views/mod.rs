use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};

use crate::models::event::Event;

pub mod day_view;
mod event_chip;
pub mod month_view;
mod month_day_cell;
mod palette;
pub mod week_view;
pub mod year_view;

/// Something the user asked for while interacting with a view.
///
/// Views never act on these themselves; the host decides what happens.
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarAction {
    SelectDay(NaiveDate),
    /// New appointment on a day, optionally at a pre-filled hour
    AddEvent(NaiveDate, Option<NaiveTime>),
    OpenEvent(Event),
    /// Zero-based month index within the displayed year
    SelectMonth(u32),
}

/// Receiver for view interactions.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarHost {
    fn on_select_day(&mut self, date: NaiveDate);
    fn on_add_event(&mut self, date: NaiveDate, time: Option<NaiveTime>);
    fn on_event_click(&mut self, event: &Event);
    fn on_select_month(&mut self, month_index: u32);
}

/// Forward a view action to the matching host callback.
pub fn dispatch(host: &mut dyn CalendarHost, action: CalendarAction) {
    log::debug!("Dispatching calendar action: {:?}", action);
    match action {
        CalendarAction::SelectDay(date) => host.on_select_day(date),
        CalendarAction::AddEvent(date, time) => host.on_add_event(date, time),
        CalendarAction::OpenEvent(event) => host.on_event_click(&event),
        CalendarAction::SelectMonth(month_index) => host.on_select_month(month_index),
    }
}

/// Hour rows drawn for a configured `start..end` window.
pub fn hour_rows(start_hour: u32, end_hour: u32) -> RangeInclusive<u32> {
    let end = end_hour.min(23);
    start_hour.min(end)..=end
}

/// Group events by their truncated hour.
///
/// Every hour in `rows` gets an entry, empty or not. Events before the first
/// row land in it, events after the last row land in the last one, so
/// nothing scheduled goes missing from a narrow window. Order within an hour
/// follows the input order.
pub fn bucket_by_hour<'a>(
    events: &'a [Event],
    rows: RangeInclusive<u32>,
) -> BTreeMap<u32, Vec<&'a Event>> {
    let (first, last) = (*rows.start(), *rows.end());
    let mut buckets: BTreeMap<u32, Vec<&Event>> = rows.map(|hour| (hour, Vec::new())).collect();

    for event in events {
        let hour = event.hour().clamp(first, last);
        if let Some(bucket) = buckets.get_mut(&hour) {
            bucket.push(event);
        }
    }

    buckets
}
