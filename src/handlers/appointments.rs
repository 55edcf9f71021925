use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};
use crate::services::appointments::AppointmentStats;
use crate::state::AppState;

// GET /api/appointments
#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    id: String,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    date: String,
    time: String,
    service: String,
    message: Option<String>,
    status: String,
    created_at: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            customer_name: appointment.customer_name,
            customer_email: appointment.customer_email,
            customer_phone: appointment.customer_phone,
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time,
            service: appointment.service,
            message: appointment.message,
            status: appointment.status.as_str().to_string(),
            created_at: appointment
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let filter = match query.status.as_deref() {
        Some(raw) => Some(
            AppointmentStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status filter: {raw}")))?,
        ),
        None => None,
    };

    let appointments = state.appointments.list_by_status(filter);
    Ok(Json(
        appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
    ))
}

// POST /api/appointments
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewAppointment>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.appointments.create(body).await?;
    tracing::info!(
        id = %appointment.id,
        date = %appointment.date,
        time = %appointment.time,
        "appointment booked"
    );
    Ok(Json(appointment.into()))
}

// PATCH /api/appointments/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<AppointmentPatch>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.appointments.update(&id, body).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/appointments/:id
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.appointments.delete(&id).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// POST /api/appointments/reload
pub async fn reload(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = state.appointments.reload().await?;
    Ok(Json(serde_json::json!({"ok": true, "count": count})))
}

// GET /api/appointments/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<AppointmentStats> {
    Json(state.appointments.stats())
}
