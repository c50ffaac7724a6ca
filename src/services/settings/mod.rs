// Settings service module
// Single-row persisted view preferences

mod mapper;
mod service;

pub use service::SettingsService;
