use chrono::{Datelike, NaiveDate};

use crate::utils::date::{days_in_month, first_of_month, monday_offset};

/// One square of a year-overview mini calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniCell {
    Blank,
    Day {
        day: u32,
        date: NaiveDate,
        is_today: bool,
    },
}

/// A month laid out Monday-first with blank padding instead of neighbour days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniMonth {
    /// Zero-based month index
    pub month_index: u32,
    pub first: NaiveDate,
    /// Blank cells before the 1st
    pub offset: u32,
    pub days: u32,
    /// Padded to whole weeks
    pub cells: Vec<MiniCell>,
}

impl MiniMonth {
    pub fn new(year: i32, month_index: u32, today: NaiveDate) -> Self {
        let first = first_of_month(year, month_index as i32);
        let offset = monday_offset(first);
        let days = days_in_month(first.year(), first.month());

        let mut cells = vec![MiniCell::Blank; offset as usize];
        cells.extend(first.iter_days().take(days as usize).map(|date| MiniCell::Day {
            day: date.day(),
            date,
            is_today: date == today,
        }));
        let padded = cells.len().div_ceil(7) * 7;
        cells.resize(padded, MiniCell::Blank);

        Self {
            month_index,
            first,
            offset,
            days,
            cells,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[MiniCell]> {
        self.cells.chunks(7)
    }

    pub fn contains_today(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| matches!(cell, MiniCell::Day { is_today: true, .. }))
    }
}

/// Twelve mini calendars for `year`.
pub fn year_overview(year: i32, today: NaiveDate) -> Vec<MiniMonth> {
    (0..12).map(|month| MiniMonth::new(year, month, today)).collect()
}
