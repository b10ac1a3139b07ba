use crate::{
    handlers::common::SelectOption,
    models::{
        issue::{ISSUABLE_MATERIALS, ISSUE_UNITS},
        material_return::{IssueReference, MaterialReturn, ReturnForm},
    },
    ApiResponse, ApiResult, AppState,
};
use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Returns list together with what the return form offers
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsPage {
    pub returns: Vec<MaterialReturn>,
    pub form: ReturnForm,
    pub issue_references: Vec<IssueReference>,
    pub materials: Vec<SelectOption>,
    pub units: Vec<SelectOption>,
}

#[utoipa::path(
    get,
    path = "/api/returns",
    summary = "Material returns",
    responses(
        (status = 200, description = "Returns and form choices", body = ApiResponse<ReturnsPage>),
    ),
    tag = "returns"
)]
pub async fn list_returns(State(state): State<AppState>) -> ApiResult<ReturnsPage> {
    let workshop = &state.services.workshop;
    Ok(Json(ApiResponse::success(ReturnsPage {
        returns: workshop.returns().to_vec(),
        form: ReturnForm::default(),
        issue_references: workshop.issue_references().to_vec(),
        materials: SelectOption::from_pairs(&ISSUABLE_MATERIALS),
        units: SelectOption::from_pairs(&ISSUE_UNITS),
    })))
}
