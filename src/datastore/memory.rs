use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{AppointmentChanges, AppointmentRow, DataStore, NewAppointmentRow, SettingsRow};

// In-process backend used when no Supabase credentials are configured, and
// by the test suite. Honors the same contract as the REST store.
#[derive(Default)]
pub struct MemoryDataStore {
    appointments: Mutex<Vec<AppointmentRow>>,
    settings: Mutex<Option<SettingsRow>>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentRow>> {
        let mut rows = self.appointments.lock().unwrap().clone();
        rows.sort_by_key(|row| row.appointment_date);
        Ok(rows)
    }

    async fn insert_appointment(&self, new: &NewAppointmentRow) -> anyhow::Result<AppointmentRow> {
        let row = AppointmentRow {
            id: Uuid::new_v4().to_string(),
            customer_name: new.customer_name.clone(),
            customer_email: new.customer_email.clone(),
            customer_phone: new.customer_phone.clone(),
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time.clone(),
            service: new.service.clone(),
            message: new.message.clone(),
            status: new.status.clone(),
            created_at: Utc::now(),
        };
        self.appointments.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_appointment(
        &self,
        id: &str,
        changes: &AppointmentChanges,
    ) -> anyhow::Result<()> {
        let mut rows = self.appointments.lock().unwrap();
        // PostgREST reports a PATCH that matched zero rows as success;
        // mirror that instead of failing on unknown ids.
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            if let Some(name) = &changes.customer_name {
                row.customer_name = name.clone();
            }
            if let Some(email) = &changes.customer_email {
                row.customer_email = email.clone();
            }
            if let Some(phone) = &changes.customer_phone {
                row.customer_phone = phone.clone();
            }
            if let Some(date) = changes.appointment_date {
                row.appointment_date = date;
            }
            if let Some(time) = &changes.appointment_time {
                row.appointment_time = time.clone();
            }
            if let Some(service) = &changes.service {
                row.service = service.clone();
            }
            if let Some(message) = &changes.message {
                row.message = Some(message.clone());
            }
            if let Some(status) = &changes.status {
                row.status = status.clone();
            }
        }
        Ok(())
    }

    async fn delete_appointment(&self, id: &str) -> anyhow::Result<()> {
        self.appointments.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn fetch_settings(&self) -> anyhow::Result<Option<SettingsRow>> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn upsert_settings(&self, row: &SettingsRow) -> anyhow::Result<()> {
        *self.settings.lock().unwrap() = Some(row.clone());
        Ok(())
    }
}
