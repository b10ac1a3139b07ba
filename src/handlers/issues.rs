use crate::{models::issue::MaterialIssue, ApiResponse, ApiResult, AppState};
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/issues",
    summary = "Material issues",
    responses(
        (status = 200, description = "Open issues", body = ApiResponse<Vec<MaterialIssue>>),
    ),
    tag = "issues"
)]
pub async fn list_issues(State(state): State<AppState>) -> ApiResult<Vec<MaterialIssue>> {
    Ok(Json(ApiResponse::success(
        state.services.workshop.issues().to_vec(),
    )))
}
