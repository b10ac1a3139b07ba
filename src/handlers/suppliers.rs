use crate::{
    commands::submissions::FormAcknowledgement,
    models::supplier::{NewSupplierForm, SupplierCard},
    ApiResponse, ApiResult, AppState,
};
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/suppliers",
    summary = "Supplier cards",
    responses(
        (status = 200, description = "Suppliers", body = ApiResponse<Vec<SupplierCard>>),
    ),
    tag = "suppliers"
)]
pub async fn list_suppliers(State(state): State<AppState>) -> ApiResult<Vec<SupplierCard>> {
    Ok(Json(ApiResponse::success(
        state.services.workshop.suppliers().to_vec(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/suppliers",
    summary = "Register supplier",
    description = "Checks the form and acknowledges it; nothing is stored",
    request_body = NewSupplierForm,
    responses(
        (status = 200, description = "Supplier accepted", body = ApiResponse<FormAcknowledgement>),
        (status = 400, description = "Required field missing", body = crate::errors::ErrorResponse),
    ),
    tag = "suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(form): Json<NewSupplierForm>,
) -> ApiResult<FormAcknowledgement> {
    let ack = state.services.submissions.register_supplier(form).await?;
    Ok(Json(ApiResponse::success(ack)))
}
