// Test fixtures - reusable test data
// Provides consistent dates, appointments and stores across test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use ngo_agenda::models::event::{Event, EventStatus};
use ngo_agenda::services::database::Database;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Wednesday, 19 Nov 2025
    pub fn mid_week() -> NaiveDate {
        ymd(2025, 11, 19)
    }

    /// Saturday, 22 Nov 2025
    pub fn saturday() -> NaiveDate {
        ymd(2025, 11, 22)
    }

    /// Thursday, 29 Feb 2024
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Appointment builders
pub mod events {
    use super::*;

    pub fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Minimal pending appointment
    pub fn appointment(time: NaiveTime, subject: &str) -> Event {
        Event::builder()
            .time(time)
            .subject_name(subject)
            .build()
            .unwrap()
    }

    /// Fully populated appointment
    pub fn treatment(time: NaiveTime, subject: &str, status: EventStatus) -> Event {
        Event::builder()
            .time(time)
            .subject_name(subject)
            .status(status)
            .procedure("Manual therapy")
            .complaint("Lower back pain")
            .session(3, 10)
            .build()
            .unwrap()
    }
}

/// Fresh in-memory store with the schema applied
pub fn store() -> Database {
    let db = Database::in_memory().expect("Failed to open in-memory database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}
