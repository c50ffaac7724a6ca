//! Day cells of the month grid.
//!
//! A cell owns its events outright and is rebuilt from scratch whenever the
//! grid is regenerated. The "+N more" placeholder is kept apart from the
//! real events so it can only ever trail them.

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::error::ModelError;
use crate::models::event::{sort_by_time, Event};

/// Which month a cell belongs to relative to the grid's focal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

/// Placeholder standing in for events beyond a display cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowMarker {
    count: NonZeroU32,
}

impl OverflowMarker {
    pub fn new(count: u32) -> Result<Self, ModelError> {
        NonZeroU32::new(count)
            .map(|count| Self { count })
            .ok_or(ModelError::EmptyOverflow)
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    pub fn label(&self) -> String {
        format!("+{} more", self.count)
    }
}

/// A day's events in display order, cut to a cap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvents {
    pub events: Vec<Event>,
    pub overflow: Option<OverflowMarker>,
}

impl DayEvents {
    /// Sort by time and keep at most `cap` events; the rest collapse into a marker.
    pub fn capped(mut events: Vec<Event>, cap: usize) -> Self {
        sort_by_time(&mut events);
        let hidden = events.len().saturating_sub(cap);
        events.truncate(cap);
        Self {
            events,
            overflow: OverflowMarker::new(hidden as u32).ok(),
        }
    }

    /// Sorted, with nothing hidden.
    pub fn uncapped(events: Vec<Event>) -> Self {
        Self::capped(events, usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.overflow.is_none()
    }

    /// Real events plus the hidden remainder.
    pub fn total(&self) -> usize {
        self.events.len() + self.overflow.map(|m| m.count() as usize).unwrap_or(0)
    }

    /// Shown entries in order, overflow marker last.
    pub fn entries(&self) -> impl Iterator<Item = CellEntry<'_>> {
        self.events
            .iter()
            .map(CellEntry::Event)
            .chain(self.overflow.map(CellEntry::Overflow))
    }
}

/// One line inside a rendered day cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellEntry<'a> {
    Event(&'a Event),
    Overflow(OverflowMarker),
}

/// One calendar cell in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day-of-month number shown in the corner (1-31)
    pub day: u32,
    pub month_relation: MonthRelation,
    pub date: NaiveDate,
    pub is_today: bool,
    pub schedule: DayEvents,
}

impl DayCell {
    pub fn new(date: NaiveDate, month_relation: MonthRelation, is_today: bool) -> Self {
        Self {
            day: date.day(),
            month_relation,
            date,
            is_today,
            schedule: DayEvents::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: DayEvents) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn is_current_month(&self) -> bool {
        self.month_relation == MonthRelation::Current
    }

    pub fn events(&self) -> &[Event] {
        &self.schedule.events
    }

    pub fn overflow(&self) -> Option<OverflowMarker> {
        self.schedule.overflow
    }
}
