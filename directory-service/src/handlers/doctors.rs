use crate::dtos::{DoctorRequest, MessageResponse};
use crate::handlers::ALLOW_ANY_ORIGIN;
use crate::models::Doctor;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use metrics::counter;
use service_core::error::AppError;

pub async fn add_doctor(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<DoctorRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = Doctor::from(req);

    let record_id = state
        .store
        .insert_doctor(&doctor)
        .await
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("An error occurred: {}", e.message()))
        })?;

    counter!("doctors_created_total").increment(1);
    tracing::info!(
        record_id = %record_id,
        speciality = %doctor.speciality,
        city = %doctor.city,
        "Doctor added"
    );

    Ok((
        ALLOW_ANY_ORIGIN,
        Json(MessageResponse::new("doctor added successfully")),
    ))
}
