use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    #[strum(serialize = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    #[strum(serialize = "Low Stock")]
    LowStock,
}

/// Row of the materials inventory page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialStock {
    pub symbol: String,
    pub material: String,
    pub category: String,
    pub purity: String,
    pub current_stock: String,
    pub unit: String,
    pub last_updated: String,
    pub status: StockStatus,
}
