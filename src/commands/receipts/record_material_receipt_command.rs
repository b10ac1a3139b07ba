use crate::{
    commands::Command,
    db::DbPool,
    entities::material_receipt,
    errors::ServiceError,
    models::receipt::{coerce_date, generate_receipt_number, ReceiptPayload},
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Inserts a receipt exactly as submitted, after coercing its date.
///
/// No business rules apply: duplicate receipt numbers, zero weights and any
/// purity string are stored as given.
#[derive(Debug, Clone)]
pub struct RecordMaterialReceiptCommand {
    pub payload: ReceiptPayload,
}

impl RecordMaterialReceiptCommand {
    pub fn new(payload: ReceiptPayload) -> Self {
        Self { payload }
    }

    fn to_active_model(&self) -> Result<material_receipt::ActiveModel, ServiceError> {
        let payload = &self.payload;

        let raw_date = payload
            .date
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidInput("Receipt date is required".to_string()))?;
        let date = coerce_date(raw_date)?;

        let receipt_number = payload
            .receipt_number
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| {
                generate_receipt_number(Utc::now().date_naive(), &mut rand::thread_rng())
            });

        let total_amount = match payload.total_amount {
            Some(total) => total,
            None => payload
                .weight
                .checked_mul(payload.purchase_price)
                .ok_or_else(|| {
                    ServiceError::InvalidInput("Receipt total is out of range".to_string())
                })?,
        }
        .round_dp(2);

        Ok(material_receipt::ActiveModel {
            id: Set(Uuid::new_v4()),
            receipt_number: Set(receipt_number),
            date: Set(date),
            supplier_name: Set(payload.supplier_name.clone()),
            material_type: Set(payload.material_type.clone()),
            purity: Set(payload.purity.clone()),
            weight: Set(payload.weight),
            unit: Set(payload.unit.clone()),
            purchase_price: Set(payload.purchase_price),
            po_number: Set(payload.po_number.clone()),
            total_amount: Set(total_amount),
            created_at: Set(Utc::now()),
        })
    }
}

#[async_trait]
impl Command for RecordMaterialReceiptCommand {
    type Result = material_receipt::Model;

    #[instrument(skip(self, db_pool), fields(supplier = %self.payload.supplier_name))]
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        let active = self.to_active_model()?;

        let saved = active.insert(db_pool.as_ref()).await.map_err(|e| {
            error!("Failed to insert material receipt: {}", e);
            ServiceError::db_error(e)
        })?;

        info!(
            receipt_id = %saved.id,
            receipt_number = %saved.receipt_number,
            total_amount = %saved.total_amount,
            "Material receipt recorded"
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::is_valid_receipt_number;
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use sea_orm::ActiveValue;

    fn payload(date: Option<&str>) -> ReceiptPayload {
        serde_json::from_value(serde_json::json!({
            "date": date,
            "supplierName": "Rajesh Jewellers",
            "materialType": "Gold",
            "purity": "22K",
            "weight": "10",
            "unit": "grams",
            "purchasePrice": "100",
            "poNumber": "PO123",
        }))
        .unwrap()
    }

    #[test]
    fn missing_date_is_rejected_before_insert() {
        let command = RecordMaterialReceiptCommand::new(payload(None));
        assert_matches!(command.to_active_model(), Err(ServiceError::InvalidInput(_)));
    }

    #[test]
    fn fills_in_receipt_number_and_total() {
        let command = RecordMaterialReceiptCommand::new(payload(Some("2024-02-20")));
        let model = command.to_active_model().unwrap();

        match model.receipt_number {
            ActiveValue::Set(number) => {
                assert!(is_valid_receipt_number(&number));
                let today = Utc::now().format("%y%m%d").to_string();
                assert!(number.starts_with(&format!("REC{today}")));
            }
            other => panic!("receipt number not set: {:?}", other),
        }
        assert_eq!(model.total_amount, ActiveValue::Set(dec!(1000)));
    }

    #[test]
    fn keeps_submitted_receipt_number() {
        let mut p = payload(Some("2024-02-20"));
        p.receipt_number = Some("REC240220042".into());
        let model = RecordMaterialReceiptCommand::new(p).to_active_model().unwrap();
        assert_eq!(
            model.receipt_number,
            ActiveValue::Set("REC240220042".to_string())
        );
    }

    #[test]
    fn fractional_total_is_rounded_to_paise() {
        let mut p = payload(Some("2024-02-20"));
        p.weight = dec!(2.5);
        p.purchase_price = dec!(1234.567);
        let model = RecordMaterialReceiptCommand::new(p).to_active_model().unwrap();
        assert_eq!(model.total_amount, ActiveValue::Set(dec!(3086.42)));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let mut p = payload(Some("2024-02-20"));
        p.weight = Decimal::MAX;
        p.purchase_price = dec!(10);
        let command = RecordMaterialReceiptCommand::new(p);
        assert_matches!(command.to_active_model(), Err(ServiceError::InvalidInput(_)));
    }

    #[test]
    fn supplied_total_skips_the_product() {
        let mut p = payload(Some("2024-02-20"));
        p.weight = Decimal::MAX;
        p.purchase_price = dec!(10);
        p.total_amount = Some(dec!(5));
        let model = RecordMaterialReceiptCommand::new(p).to_active_model().unwrap();
        assert_eq!(model.total_amount, ActiveValue::Set(dec!(5)));
    }
}
