//! Where a day's events come from.
//!
//! Views only ever see an [`EventSource`]; the seeded sample generator and
//! the SQLite appointment store are interchangeable behind it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::day_cell::DayEvents;
use crate::models::event::{sort_by_time, Event};

mod sample_data;
mod sample_source;
mod synthesizer;

pub use sample_data::SampleData;
pub use sample_source::SampleEventSource;
pub use synthesizer::{EventSynthesizer, SeededStream};

/// Events shown in a month cell before collapsing into "+N more".
pub const MONTH_CELL_CAP: usize = 5;

/// Supplies the events of a given day.
///
/// Implementations must not fail: a day that cannot be loaded comes back
/// empty so the rest of the view still paints.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// All events of `date`, in any order.
    fn events_for_day(&self, date: NaiveDate) -> Vec<Event>;

    /// Sorted events of `date` with anything past `cap` collapsed.
    fn day_schedule(&self, date: NaiveDate, cap: usize) -> DayEvents {
        DayEvents::capped(self.events_for_day(date), cap)
    }

    /// Sorted events for every day in `start..=end`, empty days included.
    fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| {
                let mut events = self.events_for_day(date);
                sort_by_time(&mut events);
                (date, events)
            })
            .collect()
    }
}

/// Source with nothing scheduled; used before a real source is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptySource;

impl EventSource for EmptySource {
    fn events_for_day(&self, _date: NaiveDate) -> Vec<Event> {
        Vec::new()
    }
}
