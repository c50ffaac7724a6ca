use super::shared::{date_to_sql, map_appointment_row, time_to_sql, DATE_FORMAT, SELECT_COLUMNS};
use super::AppointmentService;
use crate::models::event::{Event, EventStatus};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use rusqlite::{self, params};

impl<'a> AppointmentService<'a> {
    /// Book `event` on `date`; the returned copy carries the stored id.
    pub fn create(&self, date: NaiveDate, event: &Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        self.conn
            .execute(
                "INSERT INTO appointments (
                    date, time, subject_name, status, procedure, complaint,
                    session_number, total_sessions
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    date_to_sql(date),
                    time_to_sql(event.time),
                    event.subject_name,
                    event.status.as_str(),
                    event.procedure,
                    event.complaint,
                    event.session_number,
                    event.total_sessions,
                ],
            )
            .context("Failed to insert appointment")?;

        let mut stored = event.clone();
        stored.id = self.conn.last_insert_rowid().to_string();
        log::debug!("Booked appointment {} on {}", stored.id, date);
        Ok(stored)
    }

    /// Retrieve an appointment and its date by ID.
    pub fn get(&self, id: i64) -> Result<Option<(NaiveDate, Event)>> {
        let sql = format!("SELECT {}, date FROM appointments WHERE id = ?1", SELECT_COLUMNS);
        let result = self.conn.query_row(&sql, [id], |row| {
            let event = map_appointment_row(row)?;
            let date: String = row.get(8)?;
            Ok((date, event))
        });

        match result {
            Ok((date, event)) => {
                let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                    .with_context(|| format!("Corrupt date '{}' on appointment {}", date, id))?;
                Ok(Some((date, event)))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e).context("Failed to load appointment"),
        }
    }

    /// Change the status of an appointment. Returns false if it does not exist.
    pub fn update_status(&self, id: i64, status: EventStatus) -> Result<bool> {
        let rows = self
            .conn
            .execute(
                "UPDATE appointments SET status = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
                params![status.as_str(), id],
            )
            .context("Failed to update appointment status")?;
        Ok(rows > 0)
    }

    /// Delete an appointment. Returns false if it does not exist.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM appointments WHERE id = ?1", [id])
            .context("Failed to delete appointment")?;
        Ok(rows > 0)
    }
}
