use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ServiceError;

/// Column headers of the audit CSV export, in order
pub const AUDIT_CSV_HEADERS: [&str; 9] = [
    "Timestamp",
    "Transaction Type",
    "Material",
    "Material Type",
    "Quantity",
    "Wastage",
    "Person Name",
    "Person Type",
    "Reference",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum TransactionType {
    #[serde(rename = "Material Return")]
    #[strum(serialize = "Material Return")]
    MaterialReturn,
    #[serde(rename = "Material Issue")]
    #[strum(serialize = "Material Issue")]
    MaterialIssue,
    #[serde(rename = "Material Receipt")]
    #[strum(serialize = "Material Receipt")]
    MaterialReceipt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum PersonType {
    Artisan,
    Supplier,
}

/// One movement of material, read-only
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub transaction_type: TransactionType,
    pub material: String,
    pub material_type: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wastage: Option<String>,
    pub person_name: String,
    pub person_type: PersonType,
    pub reference: String,
}

impl AuditLog {
    /// Timestamp as shown in the log and the export, `YYYY-MM-DD HH:MM`
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Cells of the export row, aligned with [`AUDIT_CSV_HEADERS`]
    pub fn csv_record(&self) -> [String; 9] {
        [
            self.display_timestamp(),
            self.transaction_type.to_string(),
            self.material.clone(),
            self.material_type.clone(),
            self.quantity.clone(),
            self.wastage.clone().unwrap_or_default(),
            self.person_name.clone(),
            self.person_type.to_string(),
            self.reference.clone(),
        ]
    }
}

/// Raw query string of the audit page; every field optional
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuditQuery {
    /// Inclusive lower bound, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`
    pub end_date: Option<String>,
    /// Exact transaction type, e.g. `Material Issue`
    pub transaction_type: Option<String>,
    /// Case-insensitive substring of the material name
    pub material: Option<String>,
    /// Case-insensitive substring of the person name
    pub person: Option<String>,
}

/// Parsed predicate over audit rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub transaction_type: Option<String>,
    pub material: Option<String>,
    pub person: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads a filter bound; a bare date means midnight of that day
fn parse_bound(raw: &str) -> Result<NaiveDateTime, ServiceError> {
    let value = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ServiceError::InvalidInput(format!("Invalid filter date: {}", raw)))
}

impl TryFrom<AuditQuery> for AuditFilter {
    type Error = ServiceError;

    fn try_from(query: AuditQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            start: non_blank(query.start_date)
                .map(|raw| parse_bound(&raw))
                .transpose()?,
            end: non_blank(query.end_date)
                .map(|raw| parse_bound(&raw))
                .transpose()?,
            transaction_type: non_blank(query.transaction_type),
            material: non_blank(query.material).map(|m| m.to_lowercase()),
            person: non_blank(query.person).map(|p| p.to_lowercase()),
        })
    }
}

impl AuditFilter {
    pub fn matches(&self, log: &AuditLog) -> bool {
        if self.start.is_some_and(|start| log.timestamp < start) {
            return false;
        }
        if self.end.is_some_and(|end| log.timestamp > end) {
            return false;
        }
        if let Some(kind) = &self.transaction_type {
            if log.transaction_type.to_string() != *kind {
                return false;
            }
        }
        if let Some(material) = &self.material {
            if !log.material.to_lowercase().contains(material) {
                return false;
            }
        }
        if let Some(person) = &self.person {
            if !log.person_name.to_lowercase().contains(person) {
                return false;
            }
        }
        true
    }
}

/// Download name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("audit_log_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn row(ts: &str, kind: TransactionType, material: &str, person: &str) -> AuditLog {
        AuditLog {
            id: "AUD".into(),
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap(),
            transaction_type: kind,
            material: material.into(),
            material_type: "22K".into(),
            quantity: "10g".into(),
            wastage: None,
            person_name: person.into(),
            person_type: PersonType::Artisan,
            reference: "#X".into(),
        }
    }

    fn filter(query: AuditQuery) -> AuditFilter {
        AuditFilter::try_from(query).unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let log = row("2024-02-20 10:15", TransactionType::MaterialIssue, "Gold", "Rahul");
        assert!(AuditFilter::default().matches(&log));
    }

    #[test]
    fn date_only_end_bound_is_midnight() {
        let log = row("2024-02-20 10:15", TransactionType::MaterialIssue, "Gold", "Rahul");
        let f = filter(AuditQuery {
            end_date: Some("2024-02-20".into()),
            ..Default::default()
        });
        assert!(!f.matches(&log));

        let f = filter(AuditQuery {
            start_date: Some("2024-02-20".into()),
            end_date: Some("2024-02-20T10:15".into()),
            ..Default::default()
        });
        assert!(f.matches(&log), "bounds are inclusive");
    }

    #[test]
    fn text_filters_are_case_insensitive_substrings() {
        let log = row("2024-02-20 10:15", TransactionType::MaterialIssue, "Gold 22K", "Rahul Kumar");
        let f = filter(AuditQuery {
            material: Some("gOLD".into()),
            person: Some("kum".into()),
            ..Default::default()
        });
        assert!(f.matches(&log));
    }

    #[test]
    fn transaction_type_is_exact() {
        let log = row("2024-02-20 10:15", TransactionType::MaterialIssue, "Gold", "Rahul");
        let f = filter(AuditQuery {
            transaction_type: Some("Material".into()),
            ..Default::default()
        });
        assert!(!f.matches(&log));
    }

    #[test]
    fn blank_values_are_ignored() {
        let f = filter(AuditQuery {
            start_date: Some("".into()),
            material: Some("  ".into()),
            ..Default::default()
        });
        assert_eq!(f, AuditFilter::default());
    }

    #[test]
    fn unparseable_date_is_invalid_input() {
        let result = AuditFilter::try_from(AuditQuery {
            start_date: Some("last tuesday".into()),
            ..Default::default()
        });
        assert_matches!(result, Err(ServiceError::InvalidInput(_)));
    }

    #[test]
    fn export_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        assert_eq!(export_filename(date), "audit_log_2024-02-20.csv");
    }
}
