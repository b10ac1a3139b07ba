use crate::{
    errors::ServiceError,
    models::manufacturing::{Department, OrderDetails, OrderSummary},
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ManufacturingPage {
    pub orders: Vec<OrderSummary>,
    pub departments: Vec<Department>,
}

#[utoipa::path(
    get,
    path = "/api/manufacturing",
    summary = "Manufacturing orders",
    description = "Orders with progress over the department count",
    responses(
        (status = 200, description = "Orders and departments", body = ApiResponse<ManufacturingPage>),
    ),
    tag = "manufacturing"
)]
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<ManufacturingPage> {
    let workshop = &state.services.workshop;
    Ok(Json(ApiResponse::success(ManufacturingPage {
        orders: workshop.orders(),
        departments: workshop.departments().to_vec(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/manufacturing/{id}",
    summary = "Order details",
    params(("id" = String, Path, description = "Order id, e.g. MFG001")),
    responses(
        (status = 200, description = "Order with timeline", body = ApiResponse<OrderDetails>),
        (status = 404, description = "Unknown order", body = crate::errors::ErrorResponse),
    ),
    tag = "manufacturing"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<OrderDetails> {
    let details = state
        .services
        .workshop
        .order_details(&id)
        .ok_or_else(|| ServiceError::NotFound(format!("Manufacturing order {} not found", id)))?;
    Ok(Json(ApiResponse::success(details)))
}
