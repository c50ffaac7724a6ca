use chrono::{Duration, NaiveDate};

use crate::utils::date::week_start_monday;

/// The seven dates, Monday first, of the week containing `focal`.
pub fn week_dates(focal: NaiveDate) -> [NaiveDate; 7] {
    let monday = week_start_monday(focal);
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}
