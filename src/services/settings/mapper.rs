use crate::models::settings::Settings;
use rusqlite::Row;

pub const SETTINGS_COLUMNS: &str = "id, theme, current_view, month_event_cap,
    week_start_hour, week_end_hour, day_start_hour, day_end_hour, now_marker";

pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    Ok(Settings {
        id: Some(row.get(0)?),
        theme: row.get(1)?,
        current_view: row.get(2)?,
        month_event_cap: row.get(3)?,
        week_start_hour: row.get(4)?,
        week_end_hour: row.get(5)?,
        day_start_hour: row.get(6)?,
        day_end_hour: row.get(7)?,
        now_marker: row.get(8)?,
    })
}
