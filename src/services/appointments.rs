use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::datastore::{AppointmentChanges, DataStore, NewAppointmentRow};
use crate::models::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};

// In-memory collection of appointments, mirrored to the row store. Every
// write goes to the store first; memory changes only once the store has
// confirmed, so a failed write leaves the collection as it was.
pub struct AppointmentStore {
    data: Arc<dyn DataStore>,
    appointments: RwLock<Vec<Appointment>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

impl AppointmentStore {
    pub fn new(data: Arc<dyn DataStore>) -> Self {
        Self {
            data,
            appointments: RwLock::new(Vec::new()),
        }
    }

    pub async fn reload(&self) -> anyhow::Result<usize> {
        let rows = self.data.list_appointments().await?;
        let mut loaded: Vec<Appointment> = rows.into_iter().map(Appointment::from).collect();
        loaded.sort_by_key(|appointment| appointment.date);
        let mut appointments = self.appointments.write().unwrap();
        *appointments = loaded;
        Ok(appointments.len())
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.appointments.read().unwrap().clone()
    }

    pub fn list_by_status(&self, status: Option<AppointmentStatus>) -> Vec<Appointment> {
        let appointments = self.appointments.read().unwrap();
        match status {
            Some(status) => appointments
                .iter()
                .filter(|appointment| appointment.status == status)
                .cloned()
                .collect(),
            None => appointments.clone(),
        }
    }

    pub async fn create(&self, new: NewAppointment) -> anyhow::Result<Appointment> {
        // The store assigns id and created_at.
        let row = self
            .data
            .insert_appointment(&NewAppointmentRow::from(&new))
            .await?;
        let appointment = Appointment::from(row);
        let mut appointments = self.appointments.write().unwrap();
        appointments.push(appointment.clone());
        appointments.sort_by_key(|appointment| appointment.date);
        Ok(appointment)
    }

    pub async fn update(&self, id: &str, patch: AppointmentPatch) -> anyhow::Result<()> {
        self.data
            .update_appointment(id, &AppointmentChanges::from(&patch))
            .await?;
        let mut appointments = self.appointments.write().unwrap();
        if let Some(appointment) = appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
        {
            patch.apply_to(appointment);
        }
        appointments.sort_by_key(|appointment| appointment.date);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.data.delete_appointment(id).await?;
        self.appointments
            .write()
            .unwrap()
            .retain(|appointment| appointment.id != id);
        Ok(())
    }

    pub fn stats(&self) -> AppointmentStats {
        let appointments = self.appointments.read().unwrap();
        let mut stats = AppointmentStats {
            total: appointments.len(),
            pending: 0,
            confirmed: 0,
            cancelled: 0,
        };
        for appointment in appointments.iter() {
            match appointment.status {
                AppointmentStatus::Pending => stats.pending += 1,
                AppointmentStatus::Confirmed => stats.confirmed += 1,
                AppointmentStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::datastore::memory::MemoryDataStore;
    use crate::datastore::{AppointmentRow, SettingsRow};

    // Behaves like the memory store until broken, then every call fails.
    struct FlakyStore {
        inner: MemoryDataStore,
        broken: AtomicBool,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self {
                inner: MemoryDataStore::new(),
                broken: AtomicBool::new(false),
            }
        }

        fn break_connection(&self) {
            self.broken.store(true, Ordering::SeqCst);
        }

        fn check(&self) -> anyhow::Result<()> {
            if self.broken.load(Ordering::SeqCst) {
                Err(anyhow::anyhow!("datastore offline"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl DataStore for FlakyStore {
        async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentRow>> {
            self.check()?;
            self.inner.list_appointments().await
        }
        async fn insert_appointment(
            &self,
            new: &NewAppointmentRow,
        ) -> anyhow::Result<AppointmentRow> {
            self.check()?;
            self.inner.insert_appointment(new).await
        }
        async fn update_appointment(
            &self,
            id: &str,
            changes: &AppointmentChanges,
        ) -> anyhow::Result<()> {
            self.check()?;
            self.inner.update_appointment(id, changes).await
        }
        async fn delete_appointment(&self, id: &str) -> anyhow::Result<()> {
            self.check()?;
            self.inner.delete_appointment(id).await
        }
        async fn fetch_settings(&self) -> anyhow::Result<Option<SettingsRow>> {
            self.check()?;
            self.inner.fetch_settings().await
        }
        async fn upsert_settings(&self, row: &SettingsRow) -> anyhow::Result<()> {
            self.check()?;
            self.inner.upsert_settings(row).await
        }
    }

    fn store() -> AppointmentStore {
        AppointmentStore::new(Arc::new(MemoryDataStore::new()))
    }

    fn new_appointment(on: &str, at: &str) -> NewAppointment {
        NewAppointment {
            customer_name: "Jane Doe".into(),
            customer_email: "jane@example.com".into(),
            customer_phone: "+15550100".into(),
            date: NaiveDate::parse_from_str(on, "%Y-%m-%d").unwrap(),
            time: at.into(),
            service: "Consultation".into(),
            message: None,
            status: AppointmentStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_create_returns_store_assigned_fields() {
        let store = store();
        let created = store
            .create(new_appointment("2025-06-18", "10:00"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.status, AppointmentStatus::Pending);
        assert_eq!(store.list().len(), 1);
    }

    #[tokio::test]
    async fn test_collection_stays_sorted_by_date() {
        let store = store();
        store.create(new_appointment("2025-06-20", "10:00")).await.unwrap();
        store.create(new_appointment("2025-06-16", "10:00")).await.unwrap();
        store.create(new_appointment("2025-06-18", "10:00")).await.unwrap();
        let dates: Vec<String> = store
            .list()
            .iter()
            .map(|appointment| appointment.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2025-06-16", "2025-06-18", "2025-06-20"]);
    }

    #[tokio::test]
    async fn test_update_merges_only_patched_fields() {
        let store = store();
        let created = store
            .create(new_appointment("2025-06-18", "10:00"))
            .await
            .unwrap();
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        };
        store.update(&created.id, patch).await.unwrap();

        let listed = store.list();
        assert_eq!(listed[0].status, AppointmentStatus::Confirmed);
        assert_eq!(listed[0].customer_name, "Jane Doe");
        assert_eq!(listed[0].time, "10:00");
        assert_eq!(listed[0].id, created.id);
    }

    #[tokio::test]
    async fn test_date_change_resorts_the_collection() {
        let store = store();
        store.create(new_appointment("2025-06-16", "10:00")).await.unwrap();
        let late = store
            .create(new_appointment("2025-06-20", "10:00"))
            .await
            .unwrap();
        let patch = AppointmentPatch {
            date: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..Default::default()
        };
        store.update(&late.id, patch).await.unwrap();

        let first = &store.list()[0];
        assert_eq!(first.id, late.id);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_a_quiet_success() {
        let store = store();
        store.create(new_appointment("2025-06-18", "10:00")).await.unwrap();
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Cancelled),
            ..Default::default()
        };
        store.update("no-such-id", patch).await.unwrap();
        assert_eq!(store.list()[0].status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_delete_removes_from_collection() {
        let store = store();
        let created = store
            .create(new_appointment("2025-06-18", "10:00"))
            .await
            .unwrap();
        store.delete(&created.id).await.unwrap();
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_reload_replaces_the_collection() {
        let data = Arc::new(MemoryDataStore::new());
        let store = AppointmentStore::new(data.clone());
        data.insert_appointment(&NewAppointmentRow::from(&new_appointment(
            "2025-06-18",
            "10:00",
        )))
        .await
        .unwrap();
        data.insert_appointment(&NewAppointmentRow::from(&new_appointment(
            "2025-06-16",
            "11:00",
        )))
        .await
        .unwrap();

        let count = store.reload().await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.list()[0].date.to_string(), "2025-06-16");
    }

    #[tokio::test]
    async fn test_failed_create_leaves_memory_untouched() {
        let data = Arc::new(FlakyStore::new());
        let store = AppointmentStore::new(data.clone());
        data.break_connection();

        let result = store.create(new_appointment("2025-06-18", "10:00")).await;
        assert!(result.is_err());
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_memory_untouched() {
        let data = Arc::new(FlakyStore::new());
        let store = AppointmentStore::new(data.clone());
        let created = store
            .create(new_appointment("2025-06-18", "10:00"))
            .await
            .unwrap();

        data.break_connection();
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        };
        assert!(store.update(&created.id, patch).await.is_err());
        assert_eq!(store.list()[0].status, AppointmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_memory_untouched() {
        let data = Arc::new(FlakyStore::new());
        let store = AppointmentStore::new(data.clone());
        let created = store
            .create(new_appointment("2025-06-18", "10:00"))
            .await
            .unwrap();

        data.break_connection();
        assert!(store.delete(&created.id).await.is_err());
        assert_eq!(store.list().len(), 1);
    }

    #[tokio::test]
    async fn test_stats_counts_by_status() {
        let store = store();
        store.create(new_appointment("2025-06-16", "09:00")).await.unwrap();
        store.create(new_appointment("2025-06-17", "10:00")).await.unwrap();
        let third = store
            .create(new_appointment("2025-06-18", "11:00"))
            .await
            .unwrap();
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        };
        store.update(&third.id, patch).await.unwrap();

        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.cancelled, 0);
    }

    #[tokio::test]
    async fn test_list_by_status_filters() {
        let store = store();
        store.create(new_appointment("2025-06-16", "09:00")).await.unwrap();
        let second = store
            .create(new_appointment("2025-06-17", "10:00"))
            .await
            .unwrap();
        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Cancelled),
            ..Default::default()
        };
        store.update(&second.id, patch).await.unwrap();

        let cancelled = store.list_by_status(Some(AppointmentStatus::Cancelled));
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].id, second.id);
        assert_eq!(store.list_by_status(None).len(), 2);
    }
}
