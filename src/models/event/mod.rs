// Event module
// A scheduled appointment on a single day of the agenda

mod status;

pub use status::{ColorTag, EventStatus};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::error::ModelError;
use crate::utils::date::format_hhmm;

/// One scheduled occurrence on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique within one generation pass or store query
    pub id: String,
    /// Time of day; display value and sort/bucketing key
    pub time: NaiveTime,
    /// Patient or person the appointment is for
    pub subject_name: String,
    pub status: EventStatus,
    pub procedure: Option<String>,
    pub complaint: Option<String>,
    pub session_number: Option<u32>,
    pub total_sessions: Option<u32>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use ngo_agenda::models::event::{Event, EventStatus};
    /// use chrono::NaiveTime;
    ///
    /// let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    /// let event = Event::new("a-1", time, "Maria Silva").unwrap();
    /// assert_eq!(event.status, EventStatus::Pending);
    /// assert_eq!(event.time_label(), "09:30");
    /// ```
    pub fn new(
        id: impl Into<String>,
        time: NaiveTime,
        subject_name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let event = Self {
            id: id.into(),
            time: truncate_to_minute(time),
            subject_name: subject_name.into(),
            status: EventStatus::Pending,
            procedure: None,
            complaint: None,
            session_number: None,
            total_sessions: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.subject_name.trim().is_empty() {
            return Err(ModelError::EmptySubject);
        }

        if self.session_number == Some(0) || self.total_sessions == Some(0) {
            return Err(ModelError::ZeroSession);
        }

        if let (Some(number), Some(total)) = (self.session_number, self.total_sessions) {
            if number > total {
                return Err(ModelError::SessionOutOfRange { number, total });
            }
        }

        Ok(())
    }

    /// Derived presentation tag; never stored.
    pub fn color_tag(&self) -> ColorTag {
        self.status.color_tag()
    }

    /// Numeric ordering key, `hour * 100 + minute`.
    pub fn sort_key(&self) -> u32 {
        self.time.hour() * 100 + self.time.minute()
    }

    /// Hour row this event lands in on time-grid views.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn time_label(&self) -> String {
        format_hhmm(self.time)
    }

    /// "3/10" style session progress, when both numbers are known.
    pub fn session_label(&self) -> Option<String> {
        match (self.session_number, self.total_sessions) {
            (Some(number), Some(total)) => Some(format!("{}/{}", number, total)),
            (Some(number), None) => Some(format!("#{}", number)),
            _ => None,
        }
    }
}

/// Parse an `HH:MM` 24-hour time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ModelError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ModelError::InvalidTime(value.to_string()))
}

/// Sort a day's events by time of day, keeping insertion order on ties.
pub fn sort_by_time(events: &mut [Event]) {
    events.sort_by_key(Event::sort_key);
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    time: Option<NaiveTime>,
    subject_name: Option<String>,
    status: Option<EventStatus>,
    procedure: Option<String>,
    complaint: Option<String>,
    session_number: Option<u32>,
    total_sessions: Option<u32>,
}

impl EventBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn subject_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = Some(name.into());
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set status from a legacy color tag.
    pub fn color_tag(mut self, tag: ColorTag) -> Self {
        self.status = Some(tag.status());
        self
    }

    pub fn procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = Some(procedure.into());
        self
    }

    pub fn complaint(mut self, complaint: impl Into<String>) -> Self {
        self.complaint = Some(complaint.into());
        self
    }

    pub fn session(mut self, number: u32, total: u32) -> Self {
        self.session_number = Some(number);
        self.total_sessions = Some(total);
        self
    }

    pub fn build(self) -> Result<Event, ModelError> {
        let mut event = Event::new(
            self.id.unwrap_or_default(),
            self.time.unwrap_or_default(),
            self.subject_name.unwrap_or_default(),
        )?;
        event.status = self.status.unwrap_or(EventStatus::Pending);
        event.procedure = self.procedure;
        event.complaint = self.complaint;
        event.session_number = self.session_number;
        event.total_sessions = self.total_sessions;
        event.validate()?;
        Ok(event)
    }
}
