use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::artisan::MaterialQuantity;
use super::issue::ISSUE_UNITS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum ReturnStatus {
    Verified,
    #[serde(rename = "Pending Verification")]
    #[strum(serialize = "Pending Verification")]
    PendingVerification,
}

/// Unused material plus measured wastage handed back by an artisan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReturn {
    pub id: String,
    pub artisan_id: String,
    pub artisan_name: String,
    pub artisan_initials: String,
    pub returned: Vec<MaterialQuantity>,
    pub wastage: Vec<MaterialQuantity>,
    pub return_date: NaiveDate,
    pub status: ReturnStatus,
}

/// Open issue a return can be booked against
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueReference {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnForm {
    #[validate(length(min = 1, message = "Issue reference is required"))]
    pub issue_id: String,
    #[validate(length(min = 1, message = "Artisan is required"))]
    pub artisan_id: String,
    #[validate(length(min = 1, message = "Material is required"))]
    pub material_type: String,
    #[validate(length(min = 1, message = "Returned quantity is required"))]
    pub returned_quantity: String,
    #[validate(length(min = 1, message = "Wastage quantity is required"))]
    pub wastage_quantity: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Default for ReturnForm {
    fn default() -> Self {
        Self {
            issue_id: String::new(),
            artisan_id: String::new(),
            material_type: String::new(),
            returned_quantity: String::new(),
            wastage_quantity: String::new(),
            unit: ISSUE_UNITS[0].0.to_string(),
            remarks: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wastage_is_required() {
        let form = ReturnForm {
            issue_id: "ISS001".into(),
            artisan_id: "ART001".into(),
            material_type: "gold-22k".into(),
            returned_quantity: "95".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("wastage_quantity"));
    }

    #[test]
    fn status_label() {
        assert_eq!(
            ReturnStatus::PendingVerification.to_string(),
            "Pending Verification"
        );
    }
}
