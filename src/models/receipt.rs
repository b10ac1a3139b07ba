use crate::entities::material_receipt;
use crate::errors::ServiceError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Material types offered by the receive form
pub const RECEIPT_MATERIAL_TYPES: [&str; 4] = ["Gold", "Silver", "Diamond", "Platinum"];

/// Weight units offered by the receive form, as (value, label)
pub const RECEIPT_UNITS: [(&str, &str); 2] = [("grams", "Grams"), ("carats", "Carats")];

/// `REC` + two-digit year, month, day + three random digits
pub static RECEIPT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^REC\d{6}\d{3}$").expect("receipt number pattern is valid"));

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("float prefix pattern is valid")
});

const NAIVE_DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%d %B %Y, %I:%M %p",
];

/// Display format produced for receipt dates, e.g. `20 February 2024 at 02:30 pm`
pub const RECEIPT_DATE_FORMAT: &str = "%-d %B %Y at %I:%M %P";

/// Parses the leading numeric portion of a string, falling back to zero.
///
/// `"12.5g"` reads as 12.5, `""` and `"abc"` read as 0.
pub fn parse_amount(raw: &str) -> f64 {
    LEADING_FLOAT
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Weight multiplied by price, formatted with two decimals
pub fn calculate_total(weight: &str, price: &str) -> String {
    format!("{:.2}", parse_amount(weight) * parse_amount(price))
}

/// Builds a receipt number for `date`. Collisions are not checked.
pub fn generate_receipt_number<R: Rng>(date: NaiveDate, rng: &mut R) -> String {
    use chrono::Datelike;

    let suffix: u16 = rng.gen_range(0..1000);
    format!(
        "REC{:02}{:02}{:02}{:03}",
        date.year().rem_euclid(100),
        date.month(),
        date.day(),
        suffix
    )
}

pub fn is_valid_receipt_number(candidate: &str) -> bool {
    RECEIPT_NUMBER_PATTERN.is_match(candidate)
}

/// Formats a timestamp the way the receive form labels receipts
pub fn format_receipt_date(date: DateTime<Utc>) -> String {
    date.format(RECEIPT_DATE_FORMAT).to_string()
}

/// Coerces a submitted `date` value into a UTC timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD[ T]HH:MM[:SS]`, a bare `YYYY-MM-DD` (midnight)
/// and the long form written by the receive form. Naive values are read as UTC.
pub fn coerce_date(raw: &str) -> Result<DateTime<Utc>, ServiceError> {
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let long_form = value.replacen(" at ", ", ", 1);
    for format in NAIVE_DATE_TIME_FORMATS {
        let candidate = if format.starts_with("%d") {
            long_form.as_str()
        } else {
            value
        };
        if let Ok(naive) = NaiveDateTime::parse_from_str(candidate, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(ServiceError::InvalidInput(format!(
        "Unrecognised receipt date: {}",
        raw
    )))
}

/// Values typed into the receive form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptForm {
    pub supplier_name: String,
    pub material_type: String,
    pub purity: String,
    pub weight: String,
    pub unit: String,
    pub purchase_price: String,
    pub po_number: String,
}

impl Default for ReceiptForm {
    fn default() -> Self {
        Self {
            supplier_name: String::new(),
            material_type: String::new(),
            purity: String::new(),
            weight: String::new(),
            unit: RECEIPT_UNITS[0].0.to_string(),
            purchase_price: String::new(),
            po_number: String::new(),
        }
    }
}

impl ReceiptForm {
    /// Live total preview shown under the form
    pub fn total(&self) -> String {
        calculate_total(&self.weight, &self.purchase_price)
    }

    /// Freezes the form into the data handed to the print view
    pub fn into_receipt_data(self, receipt_number: String, date: String) -> ReceiptData {
        let total_amount = self.total();
        ReceiptData {
            receipt_number,
            date,
            supplier_name: self.supplier_name,
            material_type: self.material_type,
            purity: self.purity,
            weight: self.weight,
            unit: self.unit,
            purchase_price: self.purchase_price,
            po_number: self.po_number,
            total_amount,
        }
    }
}

/// Everything the print view shows; also the body posted to the receipt endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub receipt_number: String,
    pub date: String,
    pub supplier_name: String,
    pub material_type: String,
    pub purity: String,
    pub weight: String,
    pub unit: String,
    pub purchase_price: String,
    pub po_number: String,
    pub total_amount: String,
}

impl From<&material_receipt::Model> for ReceiptData {
    fn from(model: &material_receipt::Model) -> Self {
        Self {
            receipt_number: model.receipt_number.clone(),
            date: format_receipt_date(model.date),
            supplier_name: model.supplier_name.clone(),
            material_type: model.material_type.clone(),
            purity: model.purity.clone(),
            weight: model.weight.normalize().to_string(),
            unit: model.unit.clone(),
            purchase_price: model.purchase_price.normalize().to_string(),
            po_number: model.po_number.clone().unwrap_or_default(),
            total_amount: format!("{:.2}", model.total_amount),
        }
    }
}

impl ReceiptData {
    /// The body the receive form posts to the receipt endpoint
    pub fn to_payload(&self) -> Result<ReceiptPayload, ServiceError> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

/// Body accepted by `POST /api/materials/receive`.
///
/// Numbers may arrive as JSON numbers or numeric strings. Receipt number and
/// total are generated when absent.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReceiptPayload {
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub supplier_name: String,
    pub material_type: String,
    pub purity: String,
    #[schema(value_type = String)]
    pub weight: Decimal,
    pub unit: String,
    #[schema(value_type = String)]
    pub purchase_price: Decimal,
    #[serde(default)]
    pub po_number: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub total_amount: Option<Decimal>,
}

/// Envelope returned by the receipt endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiptResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<material_receipt::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReceiptResponse {
    pub fn stored(model: material_receipt::Model) -> Self {
        Self {
            success: true,
            data: Some(model),
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
            error: Some("Failed to create material receipt".to_string()),
        }
    }
}
