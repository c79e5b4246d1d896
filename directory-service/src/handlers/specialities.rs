use crate::dtos::{MessageResponse, SpecialityParams};
use crate::handlers::ALLOW_ANY_ORIGIN;
use crate::models::{SpecialityCatalog, SPECIALITIES_NOT_FOUND};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;

async fn load_catalog(state: &AppState) -> Result<SpecialityCatalog, AppError> {
    state
        .store
        .load_specialities()
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!(SPECIALITIES_NOT_FOUND)))
}

pub async fn get_specialities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let catalog = load_catalog(&state).await?;

    Ok((ALLOW_ANY_ORIGIN, Json(catalog.into_specialities())))
}

pub async fn add_speciality(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<SpecialityParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut catalog = load_catalog(&state).await?;

    let added = catalog.add(&params.speciality);
    state.store.save_specialities(&catalog).await?;

    tracing::info!(
        speciality = %params.speciality,
        added,
        total = catalog.specialities().len(),
        "Speciality add processed"
    );

    Ok((
        ALLOW_ANY_ORIGIN,
        Json(MessageResponse::new("speciality added successfully")),
    ))
}

pub async fn delete_speciality(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<SpecialityParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let mut catalog = load_catalog(&state).await?;

    let removed = catalog.remove(&params.speciality);
    state.store.save_specialities(&catalog).await?;

    tracing::info!(
        speciality = %params.speciality,
        removed,
        total = catalog.specialities().len(),
        "Speciality delete processed"
    );

    // Clients match on this exact text, including for deletes.
    Ok((
        ALLOW_ANY_ORIGIN,
        Json(MessageResponse::new("speciality added successfully")),
    ))
}
