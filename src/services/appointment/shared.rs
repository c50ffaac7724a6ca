use chrono::{NaiveDate, NaiveTime};
use rusqlite::{self, Result, Row};

use crate::models::event::{parse_time, Event, EventStatus};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn time_to_sql(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub(crate) fn map_appointment_row(row: &Row<'_>) -> Result<Event> {
    let id: i64 = row.get(0)?;
    let time = parse_time(&row.get::<_, String>(1)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e)))?;
    let status = row
        .get::<_, String>(3)?
        .parse::<EventStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)))?;

    Ok(Event {
        id: id.to_string(),
        time,
        subject_name: row.get(2)?,
        status,
        procedure: row.get(4)?,
        complaint: row.get(5)?,
        session_number: row.get(6)?,
        total_sessions: row.get(7)?,
    })
}

pub(crate) const SELECT_COLUMNS: &str =
    "id, time, subject_name, status, procedure, complaint, session_number, total_sessions";
