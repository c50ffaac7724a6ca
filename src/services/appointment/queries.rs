use std::collections::BTreeMap;

use super::shared::{date_to_sql, map_appointment_row, DATE_FORMAT, SELECT_COLUMNS};
use super::AppointmentService;
use crate::models::event::Event;
use anyhow::{Context, Result};
use chrono::NaiveDate;

impl<'a> AppointmentService<'a> {
    /// Appointments on `date`, ordered by time of day then booking order.
    pub fn list_for_day(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let sql = format!(
            "SELECT {} FROM appointments WHERE date = ?1 ORDER BY time ASC, id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let events = stmt
            .query_map([date_to_sql(date)], map_appointment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read appointments for {}", date))?;

        Ok(events)
    }

    /// Appointments for `start..=end`, grouped by date. Days without
    /// bookings are absent from the map.
    pub fn list_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, Vec<Event>>> {
        let sql = format!(
            "SELECT {}, date FROM appointments
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date ASC, time ASC, id ASC",
            SELECT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt
            .query_map([date_to_sql(start), date_to_sql(end)], |row| {
                Ok((row.get::<_, String>(8)?, map_appointment_row(row)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read appointment range")?;

        let mut grouped: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for (date, event) in rows {
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                .with_context(|| format!("Corrupt appointment date '{}'", date))?;
            grouped.entry(date).or_default().push(event);
        }

        Ok(grouped)
    }

    /// Number of appointments on `date`.
    pub fn count_for_day(&self, date: NaiveDate) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM appointments WHERE date = ?1",
                [date_to_sql(date)],
                |row| row.get(0),
            )
            .context("Failed to count appointments")?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;
    use chrono::NaiveTime;

    fn book(service: &AppointmentService, date: NaiveDate, h: u32, m: u32, name: &str) {
        let event = Event::builder()
            .time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
            .subject_name(name)
            .build()
            .unwrap();
        service.create(date, &event).unwrap();
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_list_for_day_orders_by_time_then_booking() {
        let db = Database::in_memory().unwrap();
        let service = AppointmentService::new(db.connection());
        let day = ymd(2025, 11, 19);

        book(&service, day, 14, 0, "second");
        book(&service, day, 8, 45, "first");
        book(&service, day, 14, 0, "third");
        book(&service, ymd(2025, 11, 20), 7, 0, "other day");

        let names: Vec<_> = service
            .list_for_day(day)
            .unwrap()
            .into_iter()
            .map(|e| e.subject_name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(service.count_for_day(day).unwrap(), 3);
    }

    #[test]
    fn test_list_in_range_is_inclusive() {
        let db = Database::in_memory().unwrap();
        let service = AppointmentService::new(db.connection());

        book(&service, ymd(2025, 11, 16), 9, 0, "before");
        book(&service, ymd(2025, 11, 17), 9, 0, "monday");
        book(&service, ymd(2025, 11, 23), 9, 0, "sunday");
        book(&service, ymd(2025, 11, 24), 9, 0, "after");

        let range = service
            .list_in_range(ymd(2025, 11, 17), ymd(2025, 11, 23))
            .unwrap();
        let dates: Vec<_> = range.keys().copied().collect();
        assert_eq!(dates, vec![ymd(2025, 11, 17), ymd(2025, 11, 23)]);
    }
}
