use crate::{
    commands::{receipts::RecordMaterialReceiptCommand, Command},
    db::DbPool,
    entities::material_receipt,
    errors::ServiceError,
    models::receipt::ReceiptPayload,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::instrument;

/// Service for the persisted material receipts
#[derive(Clone)]
pub struct ReceiptService {
    db_pool: Arc<DbPool>,
}

impl ReceiptService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Stores a submitted receipt
    #[instrument(skip(self, payload))]
    pub async fn record_receipt(
        &self,
        payload: ReceiptPayload,
    ) -> Result<material_receipt::Model, ServiceError> {
        RecordMaterialReceiptCommand::new(payload)
            .execute(self.db_pool.clone())
            .await
    }

    /// Lists receipts newest first, with the total count
    #[instrument(skip(self))]
    pub async fn list_receipts(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<material_receipt::Model>, u64), ServiceError> {
        let db = &*self.db_pool;
        let paginator = material_receipt::Entity::find()
            .order_by_desc(material_receipt::Column::CreatedAt)
            .paginate(db, per_page.max(1));

        let total = paginator.num_items().await.map_err(ServiceError::db_error)?;
        let receipts = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(ServiceError::db_error)?;

        Ok((receipts, total))
    }

    /// Most recent receipt carrying `receipt_number`; numbers are not unique
    #[instrument(skip(self))]
    pub async fn find_by_receipt_number(
        &self,
        receipt_number: &str,
    ) -> Result<Option<material_receipt::Model>, ServiceError> {
        let db = &*self.db_pool;
        material_receipt::Entity::find()
            .filter(material_receipt::Column::ReceiptNumber.eq(receipt_number))
            .order_by_desc(material_receipt::Column::CreatedAt)
            .one(db)
            .await
            .map_err(ServiceError::db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection, run_migrations};

    async fn service() -> ReceiptService {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        ReceiptService::new(Arc::new(pool))
    }

    fn payload(number: &str, supplier: &str) -> ReceiptPayload {
        serde_json::from_value(serde_json::json!({
            "receiptNumber": number,
            "date": "2024-02-20 14:30",
            "supplierName": supplier,
            "materialType": "Gold",
            "purity": "22K",
            "weight": 10,
            "unit": "grams",
            "purchasePrice": 100,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_receipt_numbers_are_stored() {
        let svc = service().await;
        svc.record_receipt(payload("REC240220001", "A")).await.unwrap();
        svc.record_receipt(payload("REC240220001", "B")).await.unwrap();

        let (rows, total) = svc.list_receipts(1, 20).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn paginates_receipts() {
        let svc = service().await;
        for i in 0..3 {
            svc.record_receipt(payload(&format!("REC24022000{i}"), "A"))
                .await
                .unwrap();
        }

        let (page_two, total) = svc.list_receipts(2, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page_two.len(), 1);
    }

    #[tokio::test]
    async fn finds_by_receipt_number() {
        let svc = service().await;
        let saved = svc
            .record_receipt(payload("REC240220777", "Rajesh Jewellers"))
            .await
            .unwrap();

        let found = svc.find_by_receipt_number("REC240220777").await.unwrap();
        assert_eq!(found.map(|r| r.id), Some(saved.id));
        assert!(svc.find_by_receipt_number("REC000000000").await.unwrap().is_none());
    }
}
