use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{BusinessHours, BusinessSettings, OffDays};
use crate::state::AppState;

// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<BusinessSettings> {
    Json(state.settings.current())
}

// PUT /api/settings/hours
pub async fn update_hours(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BusinessHours>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.settings.save_business_hours(body).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// PUT /api/settings/off-days
pub async fn update_off_days(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OffDays>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.settings.save_off_days(body).await?;
    Ok(Json(serde_json::json!({"ok": true})))
}
