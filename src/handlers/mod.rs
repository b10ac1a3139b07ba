pub mod artisans;
pub mod audit;
pub mod common;
pub mod dashboard;
pub mod issues;
pub mod manufacturing;
pub mod materials;
pub mod pages;
pub mod returns;
pub mod suppliers;

use crate::{
    config::CompanyConfig,
    db::DbPool,
    errors::ServiceError,
    services::{AuditService, ReceiptService, SubmissionService, WorkshopService},
    views::PageRenderer,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub receipts: Arc<ReceiptService>,
    pub submissions: Arc<SubmissionService>,
    pub workshop: Arc<WorkshopService>,
    pub audit: Arc<AuditService>,
    pub renderer: Arc<PageRenderer>,
}

impl AppServices {
    /// Wires the services over the pool, seeding the in-memory pages
    pub fn new(db_pool: Arc<DbPool>, company: CompanyConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            receipts: Arc::new(ReceiptService::new(db_pool.clone())),
            submissions: Arc::new(SubmissionService::new(db_pool)),
            workshop: Arc::new(WorkshopService::seeded()),
            audit: Arc::new(AuditService::default()),
            renderer: Arc::new(PageRenderer::new(company)?),
        })
    }
}
