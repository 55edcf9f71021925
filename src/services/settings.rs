use std::sync::{Arc, RwLock};

use crate::datastore::{DataStore, SettingsRow};
use crate::models::{BusinessHours, BusinessSettings, OffDays};

// The remote table keeps a single row under this fixed id.
const SETTINGS_ROW_ID: &str = "1";

// Holds the business configuration in memory and mirrors it to the single
// settings row. Saves rewrite the whole row, so the setting that is not
// being changed rides along with its last-known value.
pub struct SettingsStore {
    data: Arc<dyn DataStore>,
    settings: RwLock<BusinessSettings>,
}

impl SettingsStore {
    pub fn new(data: Arc<dyn DataStore>) -> Self {
        Self {
            data,
            settings: RwLock::new(BusinessSettings::default()),
        }
    }

    // A missing row is fine: the defaults stay in place.
    pub async fn load(&self) -> anyhow::Result<()> {
        if let Some(row) = self.data.fetch_settings().await? {
            *self.settings.write().unwrap() = BusinessSettings::from(row);
        }
        Ok(())
    }

    pub fn current(&self) -> BusinessSettings {
        self.settings.read().unwrap().clone()
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.settings.read().unwrap().business_hours.clone()
    }

    pub fn off_days(&self) -> OffDays {
        self.settings.read().unwrap().off_days.clone()
    }

    pub async fn save_business_hours(&self, hours: BusinessHours) -> anyhow::Result<()> {
        let off_days = self.off_days();
        self.data
            .upsert_settings(&settings_row(&hours, &off_days))
            .await?;
        self.settings.write().unwrap().business_hours = hours;
        Ok(())
    }

    pub async fn save_off_days(&self, off_days: OffDays) -> anyhow::Result<()> {
        let hours = self.business_hours();
        self.data
            .upsert_settings(&settings_row(&hours, &off_days))
            .await?;
        self.settings.write().unwrap().off_days = off_days;
        Ok(())
    }
}

fn settings_row(hours: &BusinessHours, off_days: &OffDays) -> SettingsRow {
    SettingsRow {
        id: SETTINGS_ROW_ID.to_string(),
        business_hours_start: hours.start.clone(),
        business_hours_end: hours.end.clone(),
        // Cleared break bounds are stored as null, not as "".
        break_start: hours.break_start.clone().filter(|s| !s.is_empty()),
        break_end: hours.break_end.clone().filter(|s| !s.is_empty()),
        off_days: Some(off_days.0.clone()),
    }
}

impl From<SettingsRow> for BusinessSettings {
    fn from(row: SettingsRow) -> Self {
        BusinessSettings {
            business_hours: BusinessHours {
                start: row.business_hours_start,
                end: row.business_hours_end,
                break_start: row.break_start.filter(|s| !s.is_empty()),
                break_end: row.break_end.filter(|s| !s.is_empty()),
            },
            off_days: row.off_days.map(OffDays).unwrap_or_else(OffDays::weekends),
        }
    }
}
