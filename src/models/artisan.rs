use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Availability of an artisan
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
pub enum ArtisanStatus {
    Active,
    #[serde(rename = "On Break")]
    #[strum(serialize = "On Break")]
    OnBreak,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
    Assigned,
    Unavailable,
}

/// Identity document presented at onboarding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum IdProof {
    Aadhar,
    #[serde(rename = "PAN")]
    #[strum(serialize = "PAN")]
    Pan,
    Voter,
    Driving,
}

/// A quantity of one material, e.g. `Gold` / `100g`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaterialQuantity {
    #[serde(rename = "type")]
    pub material_type: String,
    pub quantity: String,
}

impl MaterialQuantity {
    pub fn new(material_type: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            material_type: material_type.into(),
            quantity: quantity.into(),
        }
    }
}

/// One period in an artisan's availability timeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub status: ArtisanStatus,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StatusHistoryEntry {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub current_assignment: String,
    pub materials_issued: Vec<MaterialQuantity>,
    pub status: ArtisanStatus,
    pub status_history: Vec<StatusHistoryEntry>,
    pub initials: String,
    pub experience: String,
    pub completed_projects: u32,
    pub rating: f32,
    pub contact_number: String,
    pub address: String,
}

impl Artisan {
    /// The entry without an end date, if any
    pub fn open_entry(&self) -> Option<&StatusHistoryEntry> {
        self.status_history.last().filter(|entry| entry.is_open())
    }

    /// Closes the open history entry on `today` and starts a new one.
    ///
    /// Setting the current status again is allowed and still rolls the history.
    pub fn update_status(&mut self, status: ArtisanStatus, notes: Option<String>, today: NaiveDate) {
        if let Some(last) = self.status_history.last_mut() {
            if last.is_open() {
                last.end_date = Some(today);
            }
        }

        self.status_history.push(StatusHistoryEntry {
            status,
            start_date: today,
            end_date: None,
            notes: notes.filter(|n| !n.trim().is_empty()),
        });
        self.status = status;
    }
}

/// Body of `PUT /api/artisans/:id/status`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub status: ArtisanStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// New-artisan onboarding form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewArtisanForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Specialization is required"))]
    pub specialization: String,
    #[validate(length(min = 1, message = "Experience is required"))]
    pub experience: String,
    pub id_proof: Option<IdProof>,
    #[validate(length(min = 1, message = "ID number is required"))]
    pub id_number: String,
    #[validate(length(min = 1, message = "Bank account is required"))]
    pub bank_account: String,
    #[validate(length(min = 1, message = "IFSC code is required"))]
    pub ifsc_code: String,
    #[validate(length(min = 1, message = "Emergency contact is required"))]
    pub emergency_contact: String,
    pub joining_date: Option<NaiveDate>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewArtisanForm {
    /// Checks the required fields, including the two the derive cannot express
    pub fn check(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => validator::ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.id_proof.is_none() {
            errors.add("id_proof", validator::ValidationError::new("required"));
        }
        if self.joining_date.is_none() {
            errors.add("joining_date", validator::ValidationError::new("required"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn artisan() -> Artisan {
        Artisan {
            id: "ART009".into(),
            name: "Test Artisan".into(),
            specialization: "Gold Jewelry".into(),
            current_assignment: "Ring #R1".into(),
            materials_issued: vec![MaterialQuantity::new("Gold", "10g")],
            status: ArtisanStatus::Active,
            status_history: vec![StatusHistoryEntry {
                status: ArtisanStatus::Active,
                start_date: day(1, 1),
                end_date: None,
                notes: Some("Regular work schedule".into()),
            }],
            initials: "TA".into(),
            experience: "2 years".into(),
            completed_projects: 3,
            rating: 4.0,
            contact_number: "+91 00000 00000".into(),
            address: "Workshop #1".into(),
        }
    }

    #[test]
    fn status_labels_match_display_text() {
        assert_eq!(ArtisanStatus::OnBreak.to_string(), "On Break");
        assert_eq!(ArtisanStatus::from_str("On Leave").unwrap(), ArtisanStatus::OnLeave);
        assert_eq!(
            serde_json::to_value(ArtisanStatus::OnBreak).unwrap(),
            serde_json::json!("On Break")
        );
    }

    #[test]
    fn update_closes_open_entry_and_appends() {
        let mut a = artisan();
        a.update_status(ArtisanStatus::OnBreak, Some("Personal leave".into()), day(2, 15));

        assert_eq!(a.status, ArtisanStatus::OnBreak);
        assert_eq!(a.status_history.len(), 2);
        assert_eq!(a.status_history[0].end_date, Some(day(2, 15)));
        assert_eq!(a.open_entry().map(|e| e.status), Some(ArtisanStatus::OnBreak));
    }

    #[test]
    fn toggling_twice_keeps_prior_entries() {
        let mut a = artisan();
        a.update_status(ArtisanStatus::OnBreak, None, day(2, 15));
        a.update_status(ArtisanStatus::Active, None, day(2, 20));
        a.update_status(ArtisanStatus::Active, None, day(2, 21));

        assert_eq!(a.status_history.len(), 4);
        assert_eq!(
            a.status_history.iter().filter(|e| e.is_open()).count(),
            1,
            "exactly one open entry"
        );
        assert_eq!(a.status_history[0].notes.as_deref(), Some("Regular work schedule"));
    }

    #[test]
    fn closed_last_entry_is_left_alone() {
        let mut a = artisan();
        a.status_history[0].end_date = Some(day(1, 31));
        a.update_status(ArtisanStatus::Assigned, None, day(2, 1));

        assert_eq!(a.status_history[0].end_date, Some(day(1, 31)));
        assert!(a.status_history[1].is_open());
    }

    #[test]
    fn new_artisan_form_requires_onboarding_fields() {
        let form = NewArtisanForm {
            name: "Suresh Patel".into(),
            ..Default::default()
        };
        let errors = form.check().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("id_proof"));
        assert!(!fields.contains_key("name"));
    }
}
