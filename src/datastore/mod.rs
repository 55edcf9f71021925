pub mod memory;
pub mod rest;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};

// Row types mirror the remote schema: appointments keep their wire column
// names, dates travel as calendar-date strings, timestamps as RFC 3339.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub service: String,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointmentRow {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub service: String,
    pub message: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRow {
    pub id: String,
    pub business_hours_start: String,
    pub business_hours_end: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub off_days: Option<Vec<String>>,
}

#[async_trait]
pub trait DataStore: Send + Sync {
    async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentRow>>;
    async fn insert_appointment(&self, new: &NewAppointmentRow) -> anyhow::Result<AppointmentRow>;
    async fn update_appointment(&self, id: &str, changes: &AppointmentChanges)
        -> anyhow::Result<()>;
    async fn delete_appointment(&self, id: &str) -> anyhow::Result<()>;
    async fn fetch_settings(&self) -> anyhow::Result<Option<SettingsRow>>;
    async fn upsert_settings(&self, row: &SettingsRow) -> anyhow::Result<()>;
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
            date: row.appointment_date,
            time: row.appointment_time,
            service: row.service,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

impl From<&NewAppointment> for NewAppointmentRow {
    fn from(new: &NewAppointment) -> Self {
        NewAppointmentRow {
            customer_name: new.customer_name.clone(),
            customer_email: new.customer_email.clone(),
            customer_phone: new.customer_phone.clone(),
            appointment_date: new.date,
            appointment_time: new.time.clone(),
            service: new.service.clone(),
            // An empty message is stored as null, not as "".
            message: new.message.clone().filter(|m| !m.is_empty()),
            status: new.status.clone(),
        }
    }
}

impl From<&AppointmentPatch> for AppointmentChanges {
    fn from(patch: &AppointmentPatch) -> Self {
        AppointmentChanges {
            customer_name: patch.customer_name.clone(),
            customer_email: patch.customer_email.clone(),
            customer_phone: patch.customer_phone.clone(),
            appointment_date: patch.date,
            appointment_time: patch.time.clone(),
            service: patch.service.clone(),
            message: patch.message.clone(),
            status: patch.status.clone(),
        }
    }
}
