//! Appointment store entry point.
//! SQLite-backed bookings, queried by day or date range, organised across
//! focused submodules like the rest of the services.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::models::event::Event;
use crate::services::schedule::EventSource;

pub mod crud;
pub mod queries;
mod shared;

/// Service for appointments stored in SQLite.
pub struct AppointmentService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> AppointmentService<'a> {
    /// Create a new AppointmentService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventSource for AppointmentService<'_> {
    fn events_for_day(&self, date: NaiveDate) -> Vec<Event> {
        match self.list_for_day(date) {
            Ok(events) => events,
            Err(err) => {
                log::warn!("Failed to load appointments for {}: {:#}", date, err);
                Vec::new()
            }
        }
    }

    /// One range query instead of one query per day.
    fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut grouped = match self.list_in_range(start, end) {
            Ok(grouped) => grouped,
            Err(err) => {
                log::warn!(
                    "Failed to load appointments for {}..={}: {:#}",
                    start,
                    end,
                    err
                );
                BTreeMap::new()
            }
        };

        for date in start.iter_days().take_while(|date| *date <= end) {
            grouped.entry(date).or_default();
        }
        grouped
    }
}
