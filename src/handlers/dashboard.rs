use crate::{
    models::{dashboard::Dashboard, navigation::Navigation},
    ApiResponse, ApiResult, AppState,
};
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/navigation",
    summary = "Layout shell",
    description = "Title, navigation links and footer shared by every page",
    responses(
        (status = 200, description = "Navigation retrieved", body = ApiResponse<Navigation>,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
    ),
    tag = "pages"
)]
pub async fn navigation(State(state): State<AppState>) -> ApiResult<Navigation> {
    let navigation = state.services.renderer.navigation().clone();
    Ok(Json(ApiResponse::success(navigation)))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    summary = "Dashboard",
    description = "Stat cards, recent issues and returns, quick actions",
    responses(
        (status = 200, description = "Dashboard retrieved", body = ApiResponse<Dashboard>),
    ),
    tag = "pages"
)]
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    Ok(Json(ApiResponse::success(
        state.services.workshop.dashboard().clone(),
    )))
}
