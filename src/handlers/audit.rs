use crate::{
    errors::ApiError,
    models::audit::{export_filename, AuditFilter, AuditLog, AuditQuery},
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/audit",
    summary = "Audit log",
    description = "Material movements matching every supplied filter",
    params(AuditQuery),
    responses(
        (status = 200, description = "Matching rows", body = ApiResponse<Vec<AuditLog>>),
        (status = 400, description = "Unparseable filter date", body = crate::errors::ErrorResponse),
    ),
    tag = "audit"
)]
pub async fn list_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> ApiResult<Vec<AuditLog>> {
    let filter = AuditFilter::try_from(query)?;
    Ok(Json(ApiResponse::success(
        state.services.audit.filter(&filter),
    )))
}

#[utoipa::path(
    get,
    path = "/api/audit/export",
    summary = "Export audit log",
    description = "Filtered rows as a CSV download with one header row",
    params(AuditQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 400, description = "Unparseable filter date", body = crate::errors::ErrorResponse),
    ),
    tag = "audit"
)]
pub async fn export_audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Result<Response, ApiError> {
    let filter = AuditFilter::try_from(query)?;
    let (csv, rows) = state.services.audit.export(&filter)?;
    let filename = export_filename(Utc::now().date_naive());
    info!(rows, filename = %filename, "Audit log exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    )
        .into_response())
}
