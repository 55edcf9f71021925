use std::sync::Arc;

use crate::config::AppConfig;
use crate::datastore::DataStore;
use crate::services::appointments::AppointmentStore;
use crate::services::settings::SettingsStore;

pub struct AppState {
    pub config: AppConfig,
    pub appointments: AppointmentStore,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn new(config: AppConfig, data: Arc<dyn DataStore>) -> Self {
        Self {
            config,
            appointments: AppointmentStore::new(data.clone()),
            settings: SettingsStore::new(data),
        }
    }
}
