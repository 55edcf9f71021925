use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::services::availability::available_slots;
use crate::state::AppState;

// GET /api/slots?date=2025-06-18
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

pub async fn available(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Json<Vec<String>> {
    let hours = state.settings.business_hours();
    let off_days = state.settings.off_days();
    let appointments = state.appointments.list();
    Json(available_slots(
        query.date,
        &hours,
        &off_days,
        &appointments,
    ))
}
