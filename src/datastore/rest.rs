use anyhow::Context;
use async_trait::async_trait;
use reqwest::Method;

use super::{AppointmentChanges, AppointmentRow, DataStore, NewAppointmentRow, SettingsRow};

// Supabase exposes tables through PostgREST: filters and ordering ride in the
// query string, writes are shaped by the Prefer header.
pub struct RestDataStore {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl RestDataStore {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

#[async_trait]
impl DataStore for RestDataStore {
    async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentRow>> {
        let rows = self
            .request(Method::GET, "appointments")
            .query(&[("select", "*"), ("order", "appointment_date.asc")])
            .send()
            .await
            .context("failed to fetch appointments")?
            .error_for_status()
            .context("appointment list request rejected")?
            .json()
            .await
            .context("failed to decode appointment rows")?;
        Ok(rows)
    }

    async fn insert_appointment(&self, new: &NewAppointmentRow) -> anyhow::Result<AppointmentRow> {
        let mut rows: Vec<AppointmentRow> = self
            .request(Method::POST, "appointments")
            .header("Prefer", "return=representation")
            .json(new)
            .send()
            .await
            .context("failed to insert appointment")?
            .error_for_status()
            .context("appointment insert rejected")?
            .json()
            .await
            .context("failed to decode inserted appointment")?;
        rows.pop().context("insert returned no row")
    }

    async fn update_appointment(
        &self,
        id: &str,
        changes: &AppointmentChanges,
    ) -> anyhow::Result<()> {
        let filter = format!("eq.{id}");
        self.request(Method::PATCH, "appointments")
            .query(&[("id", filter.as_str())])
            .json(changes)
            .send()
            .await
            .context("failed to update appointment")?
            .error_for_status()
            .context("appointment update rejected")?;
        Ok(())
    }

    async fn delete_appointment(&self, id: &str) -> anyhow::Result<()> {
        let filter = format!("eq.{id}");
        self.request(Method::DELETE, "appointments")
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .context("failed to delete appointment")?
            .error_for_status()
            .context("appointment delete rejected")?;
        Ok(())
    }

    async fn fetch_settings(&self) -> anyhow::Result<Option<SettingsRow>> {
        let rows: Vec<SettingsRow> = self
            .request(Method::GET, "business_settings")
            .query(&[("select", "*"), ("id", "eq.1")])
            .send()
            .await
            .context("failed to fetch business settings")?
            .error_for_status()
            .context("business settings request rejected")?
            .json()
            .await
            .context("failed to decode business settings row")?;
        // A missing row is not an error, the caller falls back to defaults.
        Ok(rows.into_iter().next())
    }

    async fn upsert_settings(&self, row: &SettingsRow) -> anyhow::Result<()> {
        self.request(Method::POST, "business_settings")
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(row)
            .send()
            .await
            .context("failed to save business settings")?
            .error_for_status()
            .context("business settings upsert rejected")?;
        Ok(())
    }
}
