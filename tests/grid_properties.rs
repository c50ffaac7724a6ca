// Property-based tests for the date grid and the seeded sample generator
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use ngo_agenda::models::day_cell::{DayEvents, MonthRelation};
use ngo_agenda::models::event::Event;
use ngo_agenda::services::grid::{generate_month_grid_at, week_dates, GRID_CELLS};
use ngo_agenda::services::schedule::{EventSource, EventSynthesizer, SampleData, SampleEventSource};
use ngo_agenda::utils::date::days_in_month;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn grid_is_always_six_full_weeks(year in 1900i32..2200, month_index in 0i32..12) {
        let cells = generate_month_grid_at(year, month_index, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());

        prop_assert_eq!(cells.len(), GRID_CELLS);
        prop_assert_eq!(cells[0].date.weekday(), Weekday::Mon);
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn grid_relations_are_ordered_and_complete(year in 1900i32..2200, month_index in 0i32..12) {
        let cells = generate_month_grid_at(year, month_index, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let month = month_index as u32 + 1;

        let current: Vec<_> = cells.iter().filter(|c| c.is_current_month()).collect();
        prop_assert_eq!(current.len() as u32, days_in_month(year, month));
        prop_assert!(current.iter().all(|c| c.date.month() == month && c.date.year() == year));
        prop_assert!(current.iter().enumerate().all(|(i, c)| c.day == i as u32 + 1));

        let rank = |relation: MonthRelation| match relation {
            MonthRelation::Previous => 0,
            MonthRelation::Current => 1,
            MonthRelation::Next => 2,
        };
        prop_assert!(cells.windows(2).all(|w| rank(w[0].month_relation) <= rank(w[1].month_relation)));
        prop_assert!(cells.iter().filter(|c| c.month_relation == MonthRelation::Previous).count() < 7);
    }

    #[test]
    fn week_contains_focal_date(date in any_date()) {
        let dates = week_dates(date);
        prop_assert_eq!(dates[0].weekday(), Weekday::Mon);
        prop_assert!(dates.contains(&date));
    }

    #[test]
    fn sample_source_is_deterministic(seed in "[a-z]{1,12}", date in any_date()) {
        let first = SampleEventSource::new(seed.clone()).events_for_day(date);
        let second = SampleEventSource::new(seed).events_for_day(date);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn synthesized_events_are_sorted_with_unique_ids(
        seed in "[a-z]{1,12}",
        date in any_date(),
        count in 0usize..20,
    ) {
        let events = EventSynthesizer::new(SampleData::default()).generate(count, &seed, date);
        prop_assert_eq!(events.len(), count);
        prop_assert!(events.windows(2).all(|w| w[0].time <= w[1].time));

        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
        prop_assert!(events.iter().all(|e: &Event| e.color_tag() == e.status.color_tag()));
    }

    #[test]
    fn capping_preserves_total(count in 0usize..30, cap in 1usize..10) {
        let data = SampleData::default();
        let date = NaiveDate::from_ymd_opt(2025, 11, 19).unwrap();
        let events = EventSynthesizer::new(data).generate(count, "cap", date);

        let capped = DayEvents::capped(events, cap);
        prop_assert_eq!(capped.events.len(), count.min(cap));
        prop_assert_eq!(capped.total(), count);
        prop_assert_eq!(capped.overflow.is_some(), count > cap);
    }
}
