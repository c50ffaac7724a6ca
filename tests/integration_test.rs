// Integration tests for the appointment store, settings persistence and
// bootstrap configuration
mod fixtures;

use fixtures::dates::{mid_week, saturday, ymd};
use fixtures::events::{appointment, at, treatment};
use ngo_agenda::models::event::EventStatus;
use ngo_agenda::models::settings::{NowMarker, ViewType};
use ngo_agenda::services::appointment::AppointmentService;
use ngo_agenda::services::config::{AppConfig, DataSourceKind};
use ngo_agenda::services::database::Database;
use ngo_agenda::services::grid::build_month_grid;
use ngo_agenda::services::schedule::EventSource;
use ngo_agenda::services::settings::SettingsService;
use ngo_agenda::ui_egui::views::hour_rows;
use ngo_agenda::ui_egui::views::week_view::WeekLayout;
use std::collections::BTreeMap;
use pretty_assertions::assert_eq;

#[test]
fn test_settings_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("agenda.db");

    {
        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");
        let settings_service = SettingsService::new(&db);

        let mut settings = settings_service.get().expect("Failed to get settings");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.current_view, "Month");
        assert_eq!(settings.month_event_cap, 5);

        settings.theme = "dark".to_string();
        settings.month_event_cap = 3;
        settings.now_marker = NowMarker::Hidden.to_string();
        settings_service.update(&settings).expect("Failed to update settings");
        settings_service
            .set_current_view(ViewType::Week)
            .expect("Failed to save view");
    }

    // Reopen as a new launch would
    let db = Database::new(db_path.to_str().unwrap()).expect("Failed to reopen database");
    db.initialize_schema().expect("Schema init must be idempotent");
    let loaded = SettingsService::new(&db).get().expect("Failed to load settings");

    assert_eq!(loaded.theme, "dark");
    assert_eq!(loaded.month_event_cap, 3);
    assert_eq!(loaded.view_type(), ViewType::Week);
    assert_eq!(loaded.now_marker(), NowMarker::Hidden);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let db = fixtures::store();
    let service = SettingsService::new(&db);

    let mut settings = service.get().unwrap();
    settings.day_start_hour = 20;
    settings.day_end_hour = 8;
    assert!(service.update(&settings).is_err());

    // Nothing was written
    assert_eq!(service.get().unwrap().day_start_hour, 6);
}

#[test]
fn test_appointment_lifecycle() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    let saved = service
        .create(mid_week(), &treatment(at(10, 30), "Maria Silva", EventStatus::Pending))
        .expect("Failed to create appointment");
    let id: i64 = saved.id.parse().expect("Store ids are numeric");

    let (date, fetched) = service.get(id).unwrap().expect("Appointment should exist");
    assert_eq!(date, mid_week());
    assert_eq!(fetched, saved);
    assert_eq!(fetched.session_label().as_deref(), Some("3/10"));

    assert!(service.update_status(id, EventStatus::Confirmed).unwrap());
    let (_, confirmed) = service.get(id).unwrap().unwrap();
    assert_eq!(confirmed.status, EventStatus::Confirmed);

    assert!(service.delete(id).unwrap());
    assert!(service.get(id).unwrap().is_none());
    assert!(!service.update_status(id, EventStatus::Completed).unwrap());
}

#[test]
fn test_store_returns_day_sorted_by_time() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    service.create(mid_week(), &appointment(at(15, 0), "Late")).unwrap();
    service.create(mid_week(), &appointment(at(8, 15), "Early")).unwrap();
    service.create(ymd(2025, 11, 20), &appointment(at(9, 0), "Tomorrow")).unwrap();

    let names: Vec<String> = service
        .events_for_day(mid_week())
        .into_iter()
        .map(|e| e.subject_name)
        .collect();
    assert_eq!(names, vec!["Early".to_string(), "Late".to_string()]);
    assert_eq!(service.count_for_day(mid_week()).unwrap(), 2);
}

#[test]
fn test_store_keeps_weekend_bookings() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    service.create(saturday(), &appointment(at(11, 0), "Weekend clinic")).unwrap();
    assert_eq!(service.events_for_day(saturday()).len(), 1);
}

#[test]
fn test_range_query_groups_by_date() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    service.create(ymd(2025, 11, 17), &appointment(at(9, 0), "Monday")).unwrap();
    service.create(ymd(2025, 11, 23), &appointment(at(9, 0), "Sunday")).unwrap();
    service.create(ymd(2025, 11, 24), &appointment(at(9, 0), "Next week")).unwrap();

    let grouped = service
        .list_in_range(ymd(2025, 11, 17), ymd(2025, 11, 23))
        .unwrap();
    assert_eq!(grouped.len(), 2);
    assert!(grouped.contains_key(&ymd(2025, 11, 23)));
    assert!(!grouped.contains_key(&ymd(2025, 11, 24)));

    // The trait view includes empty days
    let by_day = service.events_in_range(ymd(2025, 11, 17), ymd(2025, 11, 23));
    assert_eq!(by_day.len(), 7);
}

#[test]
fn test_week_layout_from_store_matches_day_queries() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    service.create(ymd(2025, 11, 17), &appointment(at(7, 30), "Monday early")).unwrap();
    service.create(mid_week(), &appointment(at(9, 45), "Second")).unwrap();
    service.create(mid_week(), &appointment(at(9, 0), "First")).unwrap();
    service.create(saturday(), &appointment(at(21, 10), "Late clinic")).unwrap();
    service.create(ymd(2025, 11, 24), &appointment(at(9, 0), "Next week")).unwrap();

    let ranged = service.events_in_range(ymd(2025, 11, 17), ymd(2025, 11, 23));
    let per_day: BTreeMap<_, _> = ranged
        .keys()
        .map(|date| (*date, service.events_for_day(*date)))
        .collect();
    assert_eq!(ranged, per_day);

    let from_range = WeekLayout::new(mid_week(), &ranged, hour_rows(7, 21));
    let from_days = WeekLayout::new(mid_week(), &per_day, hour_rows(7, 21));
    assert_eq!(from_range, from_days);
    assert_eq!(from_range.event_count(), 4);

    let nine = from_range.rows.iter().find(|row| row.hour == 9).unwrap();
    let names: Vec<&str> = nine.days[2].iter().map(|e| e.subject_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn test_month_grid_from_store_collapses_overflow() {
    let db = fixtures::store();
    let service = AppointmentService::new(db.connection());

    for hour in 8..15 {
        service
            .create(mid_week(), &appointment(at(hour, 0), &format!("Patient {}", hour)))
            .unwrap();
    }

    let cells = build_month_grid(2025, 10, mid_week(), &service, 5);
    let cell = cells.iter().find(|c| c.date == mid_week()).unwrap();

    assert_eq!(cell.events().len(), 5);
    assert_eq!(cell.overflow().map(|o| o.count()), Some(2));
    assert_eq!(cell.overflow().unwrap().label(), "+2 more");
    assert!(cell.is_today);
}

#[test]
fn test_config_round_trip_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = AppConfig {
        data_source: DataSourceKind::Database,
        database_path: Some(dir.path().join("clinic.db")),
        sample_seed: "demo".to_string(),
    };
    config.save_to(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.resolve_database_path(), dir.path().join("clinic.db"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "data_source = \"database\"\n").unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.data_source, DataSourceKind::Database);
    assert_eq!(loaded.sample_seed, AppConfig::default().sample_seed);
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "data_source = [").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}
