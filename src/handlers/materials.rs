use crate::{
    commands::submissions::FormAcknowledgement,
    entities::material_receipt,
    errors::{ApiError, ServiceError},
    handlers::common::{PaginationParams, SelectOption},
    models::{
        issue::{IssueForm, IssuePrefill, ISSUABLE_MATERIALS, ISSUE_UNITS},
        material::MaterialStock,
        material_return::ReturnForm,
        receipt::{ReceiptData, ReceiptPayload, ReceiptResponse},
    },
    tracing::log_error,
    ApiResponse, ApiResult, AppState, PaginatedResponse,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Defaults and choices for the issue form
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueFormPage {
    pub form: IssueForm,
    pub artisans: Vec<SelectOption>,
    pub materials: Vec<SelectOption>,
    pub units: Vec<SelectOption>,
}

#[utoipa::path(
    get,
    path = "/api/materials",
    summary = "Materials inventory",
    responses(
        (status = 200, description = "Stock rows", body = ApiResponse<Vec<MaterialStock>>),
    ),
    tag = "materials"
)]
pub async fn list_materials(State(state): State<AppState>) -> ApiResult<Vec<MaterialStock>> {
    Ok(Json(ApiResponse::success(
        state.services.workshop.materials().to_vec(),
    )))
}

/// Stores a material receipt.
///
/// Any failure while reading or storing the body is logged and reported as a
/// generic 500 with `success: false`.
#[utoipa::path(
    post,
    path = "/api/materials/receive",
    summary = "Record material receipt",
    request_body = ReceiptPayload,
    responses(
        (status = 200, description = "Receipt stored", body = ReceiptResponse),
        (status = 500, description = "Receipt could not be stored", body = ReceiptResponse),
    ),
    tag = "materials"
)]
pub async fn receive_material(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ReceiptResponse>) {
    match record_receipt(&state, &body).await {
        Ok(model) => (StatusCode::OK, Json(ReceiptResponse::stored(model))),
        Err(err) => {
            log_error(&err, err.kind(), Some("Error creating material receipt"));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReceiptResponse::failed()),
            )
        }
    }
}

async fn record_receipt(
    state: &AppState,
    body: &[u8],
) -> Result<material_receipt::Model, ServiceError> {
    let payload: ReceiptPayload = serde_json::from_slice(body)?;
    state.services.receipts.record_receipt(payload).await
}

#[utoipa::path(
    get,
    path = "/api/materials/receipts",
    summary = "Stored receipts",
    description = "Receipts newest first",
    params(PaginationParams),
    responses(
        (status = 200, description = "Receipts page", body = ApiResponse<PaginatedResponse<material_receipt::Model>>),
        (status = 400, description = "Page out of range", body = crate::errors::ErrorResponse),
        (status = 500, description = "Database error", body = crate::errors::ErrorResponse),
    ),
    tag = "materials"
)]
pub async fn list_receipts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<material_receipt::Model>> {
    let (page, limit) = params.normalized()?;
    let (items, total) = state.services.receipts.list_receipts(page, limit).await?;

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items, total, page, limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/materials/receipts/{receipt_number}/print",
    summary = "Printable receipt",
    params(("receipt_number" = String, Path, description = "Receipt number, e.g. REC240220123")),
    responses(
        (status = 200, description = "Receipt page", content_type = "text/html", body = String),
        (status = 404, description = "No receipt with that number", body = crate::errors::ErrorResponse),
    ),
    tag = "materials"
)]
pub async fn print_receipt(
    State(state): State<AppState>,
    Path(receipt_number): Path<String>,
) -> Result<Html<String>, ApiError> {
    let model = state
        .services
        .receipts
        .find_by_receipt_number(&receipt_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Receipt {} not found", receipt_number)))?;

    let html = state
        .services
        .renderer
        .receipt(&ReceiptData::from(&model))?;
    Ok(Html(html))
}

#[utoipa::path(
    get,
    path = "/api/materials/issue",
    summary = "Issue form",
    params(IssuePrefill),
    responses(
        (status = 200, description = "Form defaults", body = ApiResponse<IssueFormPage>),
    ),
    tag = "materials"
)]
pub async fn issue_form(
    State(state): State<AppState>,
    Query(prefill): Query<IssuePrefill>,
) -> ApiResult<IssueFormPage> {
    let artisans = state
        .services
        .workshop
        .artisans()
        .await
        .into_iter()
        .map(|artisan| SelectOption {
            value: artisan.id,
            label: artisan.name,
        })
        .collect();

    Ok(Json(ApiResponse::success(IssueFormPage {
        form: IssueForm::prefilled(prefill),
        artisans,
        materials: SelectOption::from_pairs(&ISSUABLE_MATERIALS),
        units: SelectOption::from_pairs(&ISSUE_UNITS),
    })))
}

#[utoipa::path(
    post,
    path = "/api/materials/issue",
    summary = "Issue material",
    request_body = IssueForm,
    responses(
        (status = 200, description = "Issue accepted", body = ApiResponse<FormAcknowledgement>),
        (status = 400, description = "Required field missing", body = crate::errors::ErrorResponse),
    ),
    tag = "materials"
)]
pub async fn issue_material(
    State(state): State<AppState>,
    Json(form): Json<IssueForm>,
) -> ApiResult<FormAcknowledgement> {
    let ack = state.services.submissions.issue_material(form).await?;
    Ok(Json(ApiResponse::success(ack)))
}

#[utoipa::path(
    post,
    path = "/api/materials/return",
    summary = "Return material",
    request_body = ReturnForm,
    responses(
        (status = 200, description = "Return accepted", body = ApiResponse<FormAcknowledgement>),
        (status = 400, description = "Required field missing", body = crate::errors::ErrorResponse),
    ),
    tag = "materials"
)]
pub async fn return_material(
    State(state): State<AppState>,
    Json(form): Json<ReturnForm>,
) -> ApiResult<FormAcknowledgement> {
    let ack = state.services.submissions.return_material(form).await?;
    Ok(Json(ApiResponse::success(ack)))
}
