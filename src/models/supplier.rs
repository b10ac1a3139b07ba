use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum SupplierStatus {
    Active,
    Inactive,
}

/// Card shown on the suppliers page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCard {
    pub name: String,
    pub tagline: String,
    pub status: SupplierStatus,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub last_order: String,
    pub total_orders: u32,
}

/// New-supplier form. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSupplierForm {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "GST number is required"))]
    pub gst_number: String,
    pub material_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
