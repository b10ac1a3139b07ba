use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::artisan::MaterialQuantity;

/// Materials selectable on the issue and return forms, as (value, label)
pub const ISSUABLE_MATERIALS: [(&str, &str); 3] = [
    ("gold-22k", "Gold (22K)"),
    ("silver-999", "Silver (99.9%)"),
    ("diamond-vvs1", "Diamond (VVS1)"),
];

/// Units selectable on the issue and return forms, as (value, label)
pub const ISSUE_UNITS: [(&str, &str); 2] = [("g", "Grams (g)"), ("ct", "Carats (ct)")];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum IssueStatus {
    Active,
    #[serde(rename = "Due Today")]
    #[strum(serialize = "Due Today")]
    DueToday,
}

/// Material handed to an artisan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialIssue {
    pub id: String,
    pub artisan_id: String,
    pub artisan_name: String,
    pub artisan_initials: String,
    pub materials: Vec<MaterialQuantity>,
    pub issue_date: NaiveDate,
    pub expected_return: NaiveDate,
    pub status: IssueStatus,
}

/// Query of `GET /api/materials/issue`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct IssuePrefill {
    /// Artisan to preselect on the form
    pub artisan_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueForm {
    #[validate(length(min = 1, message = "Artisan is required"))]
    pub artisan_id: String,
    #[validate(length(min = 1, message = "Material is required"))]
    pub material_type: String,
    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,
    pub unit: String,
    #[validate(length(min = 1, message = "Purpose is required"))]
    pub purpose: String,
    #[validate(length(min = 1, message = "Expected return date is required"))]
    pub expected_return: String,
}

impl Default for IssueForm {
    fn default() -> Self {
        Self {
            artisan_id: String::new(),
            material_type: String::new(),
            quantity: String::new(),
            unit: ISSUE_UNITS[0].0.to_string(),
            purpose: String::new(),
            expected_return: String::new(),
        }
    }
}

impl IssueForm {
    /// Blank form, optionally with the artisan already chosen
    pub fn prefilled(prefill: IssuePrefill) -> Self {
        Self {
            artisan_id: prefill
                .artisan_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_default(),
            ..Default::default()
        }
    }
}
