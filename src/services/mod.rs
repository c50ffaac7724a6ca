// Service module exports

pub mod appointment;
pub mod config;
pub mod database;
pub mod grid;
pub mod schedule;
pub mod settings;
