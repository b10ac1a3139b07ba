use crate::{
    commands::submissions::FormAcknowledgement,
    errors::ServiceError,
    models::artisan::{Artisan, NewArtisanForm, StatusUpdateRequest},
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/api/artisans",
    summary = "Artisan table",
    responses(
        (status = 200, description = "Artisans", body = ApiResponse<Vec<Artisan>>),
    ),
    tag = "artisans"
)]
pub async fn list_artisans(State(state): State<AppState>) -> ApiResult<Vec<Artisan>> {
    Ok(Json(ApiResponse::success(
        state.services.workshop.artisans().await,
    )))
}

#[utoipa::path(
    get,
    path = "/api/artisans/{id}",
    summary = "Artisan details",
    params(("id" = String, Path, description = "Artisan id, e.g. ART001")),
    responses(
        (status = 200, description = "Artisan", body = ApiResponse<Artisan>),
        (status = 404, description = "Unknown artisan", body = crate::errors::ErrorResponse),
    ),
    tag = "artisans"
)]
pub async fn get_artisan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Artisan> {
    match state.services.workshop.artisan(&id).await {
        Some(artisan) => Ok(Json(ApiResponse::success(artisan))),
        None => Err(ServiceError::NotFound(format!("Artisan {} not found", id)).into()),
    }
}

#[utoipa::path(
    post,
    path = "/api/artisans",
    summary = "Register artisan",
    description = "Checks the form and acknowledges it; nothing is stored",
    request_body = NewArtisanForm,
    responses(
        (status = 200, description = "Artisan accepted", body = ApiResponse<FormAcknowledgement>),
        (status = 400, description = "Required field missing", body = crate::errors::ErrorResponse),
    ),
    tag = "artisans"
)]
pub async fn create_artisan(
    State(state): State<AppState>,
    Json(form): Json<NewArtisanForm>,
) -> ApiResult<FormAcknowledgement> {
    let ack = state.services.submissions.register_artisan(form).await?;
    Ok(Json(ApiResponse::success(ack)))
}

#[utoipa::path(
    put,
    path = "/api/artisans/{id}/status",
    summary = "Update artisan status",
    description = "Closes the open history entry today and opens one with the new status",
    params(("id" = String, Path, description = "Artisan id")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Updated artisan", body = ApiResponse<Artisan>),
        (status = 404, description = "Unknown artisan", body = crate::errors::ErrorResponse),
        (status = 422, description = "Unknown status value"),
    ),
    tag = "artisans"
)]
pub async fn update_artisan_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> ApiResult<Artisan> {
    let today = Utc::now().date_naive();
    let updated = state
        .services
        .workshop
        .update_artisan_status(&id, request, today)
        .await
        .ok_or_else(|| ServiceError::NotFound(format!("Artisan {} not found", id)))?;

    Ok(Json(ApiResponse::success(updated)))
}
