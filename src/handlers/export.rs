use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::services::export::appointments_csv;
use crate::state::AppState;

// GET /api/appointments/export
pub async fn download_csv(State(state): State<Arc<AppState>>) -> Response {
    let csv = appointments_csv(&state.appointments.list());

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"appointments.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}
