use chrono::{Duration, NaiveDate};

use super::state::HostState;
use crate::models::settings::ViewType;
use crate::services::grid::week_dates;
use crate::utils::date::{shift_month_preserving_day, shift_year_preserving_day};

impl HostState {
    pub(super) fn navigate_previous(&mut self) {
        self.focal_date = step(self.view, self.focal_date, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.focal_date = step(self.view, self.focal_date, 1);
    }

    pub(super) fn jump_to_today(&mut self, today: NaiveDate) {
        self.focal_date = today;
        self.selected_day = Some(today);
    }

    /// Title for the navigation bar.
    pub(super) fn period_label(&self) -> String {
        match self.view {
            ViewType::Day => self.focal_date.format("%A, %d %B %Y").to_string(),
            ViewType::Week => {
                let dates = week_dates(self.focal_date);
                format!(
                    "{} – {}",
                    dates[0].format("%d %b"),
                    dates[6].format("%d %b %Y")
                )
            }
            ViewType::Month => self.focal_date.format("%B %Y").to_string(),
            ViewType::Year => self.focal_date.format("%Y").to_string(),
        }
    }
}

/// Move `date` by one period of `view` in `direction` (+1 or -1).
fn step(view: ViewType, date: NaiveDate, direction: i32) -> NaiveDate {
    match view {
        ViewType::Day => date + Duration::days(direction as i64),
        ViewType::Week => date + Duration::weeks(direction as i64),
        ViewType::Month => shift_month_preserving_day(date, direction),
        ViewType::Year => shift_year_preserving_day(date, direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewType::Day, ymd(2025, 3, 1), ymd(2025, 2, 28), ymd(2025, 3, 2) ; "day")]
    #[test_case(ViewType::Week, ymd(2025, 11, 19), ymd(2025, 11, 12), ymd(2025, 11, 26) ; "week")]
    #[test_case(ViewType::Month, ymd(2025, 3, 31), ymd(2025, 2, 28), ymd(2025, 4, 30) ; "month clamps day")]
    #[test_case(ViewType::Month, ymd(2025, 1, 15), ymd(2024, 12, 15), ymd(2025, 2, 15) ; "month across year")]
    #[test_case(ViewType::Year, ymd(2024, 2, 29), ymd(2023, 2, 28), ymd(2025, 2, 28) ; "year leap day")]
    fn test_navigation_steps(view: ViewType, start: NaiveDate, prev: NaiveDate, next: NaiveDate) {
        let mut host = HostState::new(view, start);
        host.navigate_previous();
        assert_eq!(host.focal_date, prev);

        let mut host = HostState::new(view, start);
        host.navigate_next();
        assert_eq!(host.focal_date, next);
    }

    #[test]
    fn test_jump_to_today_selects_it() {
        let mut host = HostState::new(ViewType::Month, ymd(2020, 1, 1));
        host.jump_to_today(ymd(2025, 11, 19));
        assert_eq!(host.focal_date, ymd(2025, 11, 19));
        assert_eq!(host.selected_day, Some(ymd(2025, 11, 19)));
    }

    #[test]
    fn test_period_labels() {
        let host = HostState::new(ViewType::Week, ymd(2025, 11, 19));
        assert_eq!(host.period_label(), "17 Nov – 23 Nov 2025");

        let host = HostState::new(ViewType::Month, ymd(2025, 11, 19));
        assert_eq!(host.period_label(), "November 2025");

        let host = HostState::new(ViewType::Year, ymd(2025, 11, 19));
        assert_eq!(host.period_label(), "2025");
    }
}
