use crate::services::appointment::AppointmentService;
use crate::services::config::{AppConfig, DataSourceKind};
use crate::services::database::Database;
use crate::services::schedule::{EventSource, SampleEventSource};
use crate::services::settings::SettingsService;

/// Shared access point for services and resources that multiple app modules need.
pub struct AppContext {
    database: &'static Database,
    config: AppConfig,
    source: Box<dyn EventSource>,
}

impl AppContext {
    pub fn new(database: &'static Database, config: AppConfig) -> Self {
        let source: Box<dyn EventSource> = match config.data_source {
            DataSourceKind::Sample => {
                log::info!("Using sample appointments (seed '{}')", config.sample_seed);
                Box::new(SampleEventSource::new(config.sample_seed.clone()))
            }
            DataSourceKind::Database => {
                log::info!("Using appointment store");
                Box::new(AppointmentService::new(database.connection()))
            }
        };

        Self {
            database,
            config,
            source,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &dyn EventSource {
        self.source.as_ref()
    }

    /// Whether appointments can be created or edited.
    pub fn is_store_backed(&self) -> bool {
        self.config.data_source == DataSourceKind::Database
    }

    pub fn database(&self) -> &'static Database {
        self.database
    }

    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(self.database)
    }

    pub fn appointment_service(&self) -> AppointmentService<'static> {
        AppointmentService::new(self.database.connection())
    }
}
