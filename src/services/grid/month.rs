use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::day_cell::{DayCell, MonthRelation};
use crate::services::schedule::EventSource;
use crate::utils::date::{days_in_month, first_of_month, monday_offset};

/// Six full Monday-first weeks.
pub const GRID_CELLS: usize = 42;

/// Month grid for a zero-based month index, with "today" from the local clock.
pub fn generate_month_grid(year: i32, month_index: i32) -> Vec<DayCell> {
    generate_month_grid_at(year, month_index, Local::now().date_naive())
}

/// Month grid with an explicit notion of today.
///
/// Emits the trailing days of the previous month needed to start the first
/// row on a Monday, every day of the target month, then leading days of the
/// following month until the grid holds [`GRID_CELLS`] cells. Month indices
/// outside 0..=11 roll into neighbouring years; years outside
/// 1..=9999 clamp to the nearest supported month.
pub fn generate_month_grid_at(year: i32, month_index: i32, today: NaiveDate) -> Vec<DayCell> {
    let first = first_of_month(year, month_index);
    let offset = monday_offset(first) as i64;
    let month_len = days_in_month(first.year(), first.month());

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for back in (1..=offset).rev() {
        let date = first - Duration::days(back);
        cells.push(DayCell::new(date, MonthRelation::Previous, false));
    }

    for date in first.iter_days().take(month_len as usize) {
        cells.push(DayCell::new(date, MonthRelation::Current, date == today));
    }

    let next_first = first + Duration::days(month_len as i64);
    let remaining = GRID_CELLS - cells.len();
    for date in next_first.iter_days().take(remaining) {
        cells.push(DayCell::new(date, MonthRelation::Next, false));
    }

    cells
}

/// Month grid with each cell's events pulled from `source` and cut to `cap`.
pub fn build_month_grid(
    year: i32,
    month_index: i32,
    today: NaiveDate,
    source: &dyn EventSource,
    cap: usize,
) -> Vec<DayCell> {
    generate_month_grid_at(year, month_index, today)
        .into_iter()
        .map(|cell| {
            let schedule = source.day_schedule(cell.date, cap);
            cell.with_schedule(schedule)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_cell::DayEvents;
    use crate::models::event::Event;
    use crate::services::schedule::MockEventSource;
    use chrono::NaiveTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count(cells: &[DayCell], relation: MonthRelation) -> usize {
        cells.iter().filter(|c| c.month_relation == relation).count()
    }

    #[test]
    fn test_november_2025_layout() {
        let cells = generate_month_grid_at(2025, 10, ymd(2020, 1, 1));

        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(count(&cells, MonthRelation::Previous), 5);
        assert_eq!(count(&cells, MonthRelation::Current), 30);
        assert_eq!(count(&cells, MonthRelation::Next), 7);

        // Mon Oct 27 .. Fri Oct 31 lead the grid
        assert_eq!(cells[0].date, ymd(2025, 10, 27));
        assert_eq!(cells[4].date, ymd(2025, 10, 31));
        assert_eq!(cells[5].date, ymd(2025, 11, 1));
        assert_eq!(cells[41].date, ymd(2025, 12, 7));
    }

    #[test]
    fn test_month_starting_monday_has_no_previous_cells() {
        // September 1 2025 is a Monday
        let cells = generate_month_grid_at(2025, 8, ymd(2020, 1, 1));
        assert_eq!(cells[0].date, ymd(2025, 9, 1));
        assert_eq!(cells[0].month_relation, MonthRelation::Current);
        assert_eq!(count(&cells, MonthRelation::Previous), 0);
    }

    #[test]
    fn test_today_flag_only_in_focal_month() {
        let today = ymd(2025, 11, 3);
        let cells = generate_month_grid_at(2025, 10, today);
        let todays: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].day, 3);

        // Nov 3 also appears as a trailing Next cell of October's grid
        let october = generate_month_grid_at(2025, 9, today);
        assert!(october.iter().any(|c| c.date == today));
        assert!(october.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_wall_clock_grid_marks_today_once() {
        let today = Local::now().date_naive();
        let cells = generate_month_grid(today.year(), today.month0() as i32);
        if Local::now().date_naive() != today {
            // Crossed midnight between the two reads
            return;
        }

        let todays: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today);
        assert_eq!(todays[0].day, today.day());
    }

    #[test]
    fn test_out_of_range_years_clamp_to_supported_edge() {
        let far_future = generate_month_grid_at(300_000, 0, ymd(2020, 1, 1));
        assert_eq!(far_future.len(), GRID_CELLS);
        assert!(far_future
            .iter()
            .filter(|c| c.is_current_month())
            .all(|c| c.date.year() == 9999 && c.date.month() == 12));
        assert_eq!(far_future[41].date, ymd(10000, 1, 9));

        let far_past = generate_month_grid_at(-40, 3, ymd(2020, 1, 1));
        assert_eq!(far_past.len(), GRID_CELLS);
        // 1 Jan 0001 is a Monday
        assert_eq!(far_past[0].date, ymd(1, 1, 1));
    }

    #[test]
    fn test_negative_month_rolls_back_a_year() {
        let cells = generate_month_grid_at(2026, -1, ymd(2020, 1, 1));
        let first_current = cells.iter().find(|c| c.is_current_month()).unwrap();
        assert_eq!(first_current.date, ymd(2025, 12, 1));
    }

    #[test]
    fn test_build_month_grid_attaches_capped_events() {
        let mut source = MockEventSource::new();
        source.expect_day_schedule().returning(|date, cap| {
            if date.day() == 10 && date.month() == 11 {
                let events = (0..7)
                    .map(|i| {
                        Event::new(
                            format!("e{}", i),
                            NaiveTime::from_hms_opt(8 + i, 0, 0).unwrap(),
                            "Subject",
                        )
                        .unwrap()
                    })
                    .collect();
                DayEvents::capped(events, cap)
            } else {
                DayEvents::default()
            }
        });

        let cells = build_month_grid(2025, 10, ymd(2020, 1, 1), &source, 5);
        let busy = cells.iter().find(|c| c.date == ymd(2025, 11, 10)).unwrap();

        assert_eq!(busy.events().len(), 5);
        assert_eq!(busy.overflow().map(|m| m.count()), Some(2));
        assert!(cells
            .iter()
            .filter(|c| c.date != busy.date)
            .all(|c| c.schedule.is_empty()));
    }
}
