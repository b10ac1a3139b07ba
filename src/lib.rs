//! Jewellery Tracker Library
//!
//! Material tracking for a jewellery workshop: receipts from suppliers are
//! stored in the database, the dashboard pages are served as JSON, and the
//! receive flow renders a printable receipt.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod seed;
pub mod services;
pub mod tracing;
pub mod views;

use axum::{
    http::HeaderValue,
    response::Json,
    routing::{get, post, put},
    Router,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::ToSchema;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Builds the handler services over an established pool
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
    ) -> Result<Self, errors::ServiceError> {
        let services = handlers::AppServices::new(db.clone(), config.company.clone())?;
        Ok(Self {
            db,
            config,
            services,
        })
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}


/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ApiError>;

/// JSON routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    use handlers::{
        artisans, audit, dashboard, issues, manufacturing, materials, returns, suppliers,
    };

    Router::new()
        .route("/status", get(api_status))
        .route("/navigation", get(dashboard::navigation))
        .route("/dashboard", get(dashboard::dashboard))
        // Materials
        .route("/materials", get(materials::list_materials))
        .route("/materials/receive", post(materials::receive_material))
        .route("/materials/receipts", get(materials::list_receipts))
        .route(
            "/materials/receipts/:receipt_number/print",
            get(materials::print_receipt),
        )
        .route(
            "/materials/issue",
            get(materials::issue_form).post(materials::issue_material),
        )
        .route("/materials/return", post(materials::return_material))
        // People
        .route(
            "/suppliers",
            get(suppliers::list_suppliers).post(suppliers::create_supplier),
        )
        .route(
            "/artisans",
            get(artisans::list_artisans).post(artisans::create_artisan),
        )
        .route("/artisans/:id", get(artisans::get_artisan))
        .route("/artisans/:id/status", put(artisans::update_artisan_status))
        // Movements
        .route("/issues", get(issues::list_issues))
        .route("/returns", get(returns::list_returns))
        .route("/audit", get(audit::list_audit_logs))
        .route("/audit/export", get(audit::export_audit_logs))
        // Workshop
        .route("/manufacturing", get(manufacturing::list_orders))
        .route("/manufacturing/:id", get(manufacturing::get_order))
}

/// Full application router without CORS or compression
pub fn app_router(state: AppState) -> Router {
    let health = health::health_routes(state.db.clone());

    Router::new()
        .route("/", get(|| async { "jewellery-tracker up" }))
        .nest("/api", api_routes())
        .route(
            "/materials/receive",
            get(handlers::pages::receive_form).post(handlers::pages::submit_receive_form),
        )
        .with_state(state)
        .nest("/health", health)
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
}

/// CORS from configured origins, or permissive where the config allows it
pub fn cors_layer(cfg: &config::AppConfig) -> anyhow::Result<CorsLayer> {
    let configured_origins: Option<Vec<HeaderValue>> = cfg
        .cors_allowed_origins
        .as_ref()
        .map(|raw| {
            raw.split(',')
                .filter_map(|origin| {
                    let trimmed = origin.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|origins| !origins.is_empty());

    if let Some(origins) = configured_origins {
        Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any))
    } else if cfg.should_allow_permissive_cors() {
        ::tracing::info!(
            environment = %cfg.environment,
            "Using permissive CORS because explicit origins were not configured"
        );
        Ok(CorsLayer::permissive())
    } else {
        anyhow::bail!(
            "Missing CORS configuration: set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true"
        )
    }
}

#[utoipa::path(
    get,
    path = "/api/status",
    summary = "Service status",
    responses(
        (status = 200, description = "Version and environment", body = ApiResponse<Value>),
    ),
    tag = "system"
)]
pub async fn api_status(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> ApiResult<Value> {
    let status_data = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jewellery-tracker",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config.environment,
    });

    Ok(Json(ApiResponse::success(status_data)))
}
