//! Patient listing endpoint
//!
//! GET /api/ident/patients - newest changes first, limit/offset windowed.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, Patient};

use crate::db::repos::PatientRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListQuery};

/// Patient as served to clients
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub patient_number: Option<String>,
    pub status: Option<i64>,
    pub datetime_changed: Option<String>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            patient_number: patient.patient_number,
            status: patient.status,
            datetime_changed: patient.datetime_changed.map(format_datetime),
        }
    }
}

/// GET /patients
async fn list_patients(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let params = ListParams::from(query);
    let patients = PatientRepo::new(&state.pool).list(params).await?;
    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/patients", get(list_patients))
}
