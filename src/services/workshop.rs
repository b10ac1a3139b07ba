use crate::{
    models::{
        artisan::{Artisan, StatusUpdateRequest},
        dashboard::Dashboard,
        issue::MaterialIssue,
        manufacturing::{Department, ManufacturingOrder, OrderDetails, OrderSummary},
        material::MaterialStock,
        material_return::{IssueReference, MaterialReturn},
        supplier::SupplierCard,
    },
    seed,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

/// In-memory records behind every page except receipts.
///
/// Only the artisan roster changes after start-up.
#[derive(Clone)]
pub struct WorkshopService {
    artisans: Arc<RwLock<Vec<Artisan>>>,
    suppliers: Arc<Vec<SupplierCard>>,
    materials: Arc<Vec<MaterialStock>>,
    issues: Arc<Vec<MaterialIssue>>,
    issue_references: Arc<Vec<IssueReference>>,
    returns: Arc<Vec<MaterialReturn>>,
    departments: Arc<Vec<Department>>,
    orders: Arc<Vec<ManufacturingOrder>>,
    dashboard: Arc<Dashboard>,
}

impl Default for WorkshopService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl WorkshopService {
    /// Service loaded with the sample records
    pub fn seeded() -> Self {
        Self {
            artisans: Arc::new(RwLock::new(seed::artisans())),
            suppliers: Arc::new(seed::suppliers()),
            materials: Arc::new(seed::materials()),
            issues: Arc::new(seed::issues()),
            issue_references: Arc::new(seed::issue_references()),
            returns: Arc::new(seed::returns()),
            departments: Arc::new(seed::departments()),
            orders: Arc::new(seed::manufacturing_orders()),
            dashboard: Arc::new(seed::dashboard()),
        }
    }

    pub async fn artisans(&self) -> Vec<Artisan> {
        self.artisans.read().await.clone()
    }

    pub async fn artisan(&self, id: &str) -> Option<Artisan> {
        self.artisans.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Rolls the artisan's status history; `None` when the id is unknown
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub async fn update_artisan_status(
        &self,
        id: &str,
        request: StatusUpdateRequest,
        today: NaiveDate,
    ) -> Option<Artisan> {
        let mut roster = self.artisans.write().await;
        let Some(artisan) = roster.iter_mut().find(|a| a.id == id) else {
            warn!(artisan_id = id, "Status update for unknown artisan");
            return None;
        };

        artisan.update_status(request.status, request.notes, today);
        info!(
            artisan_id = id,
            history_len = artisan.status_history.len(),
            "Artisan status updated"
        );
        Some(artisan.clone())
    }

    pub fn suppliers(&self) -> &[SupplierCard] {
        &self.suppliers
    }

    pub fn materials(&self) -> &[MaterialStock] {
        &self.materials
    }

    pub fn issues(&self) -> &[MaterialIssue] {
        &self.issues
    }

    pub fn issue_references(&self) -> &[IssueReference] {
        &self.issue_references
    }

    pub fn returns(&self) -> &[MaterialReturn] {
        &self.returns
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn orders(&self) -> Vec<OrderSummary> {
        self.orders
            .iter()
            .map(|order| OrderSummary {
                progress: order.progress(self.departments.len()),
                order: order.clone(),
            })
            .collect()
    }

    pub fn order_details(&self, id: &str) -> Option<OrderDetails> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .map(|order| OrderDetails::new(order, &self.departments))
    }
}
