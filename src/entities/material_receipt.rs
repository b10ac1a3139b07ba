use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// A material receipt recorded against a supplier delivery.
///
/// Rows are inserted as submitted; nothing enforces unique receipt numbers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "material_receipts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub receipt_number: String,
    pub date: DateTime<Utc>,
    pub supplier_name: String,
    pub material_type: String,
    pub purity: String,
    #[schema(value_type = String)]
    pub weight: Decimal,
    pub unit: String,
    #[schema(value_type = String)]
    pub purchase_price: Decimal,
    pub po_number: Option<String>,
    #[schema(value_type = String, example = "1000.00")]
    #[serde(serialize_with = "serialize_amount")]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Money always goes out with two decimals, e.g. `"1000.00"`
fn serialize_amount<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_is_serialized_with_two_decimals() {
        let model = Model {
            id: Uuid::nil(),
            receipt_number: "REC240220123".into(),
            date: Utc::now(),
            supplier_name: "Rajesh Jewellers".into(),
            material_type: "Gold".into(),
            purity: "22K".into(),
            weight: dec!(10),
            unit: "grams".into(),
            purchase_price: dec!(100),
            po_number: None,
            total_amount: dec!(1000),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["totalAmount"], "1000.00");
    }
}
