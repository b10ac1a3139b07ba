use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination parameters for list operations
#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationParams {
    /// Page and page size clamped to usable values.
    ///
    /// Pages whose row offset does not fit a SQL `OFFSET` are rejected.
    pub fn normalized(&self) -> Result<(u64, u64), ServiceError> {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, 100);
        (page - 1)
            .checked_mul(per_page)
            .filter(|offset| *offset <= i64::MAX as u64)
            .map(|_| (page, per_page))
            .ok_or_else(|| ServiceError::InvalidInput(format!("Page {} is out of range", page)))
    }
}

/// One entry of a select box, as (value, label)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Self> {
        pairs
            .iter()
            .map(|(value, label)| Self {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect()
    }

    /// Options whose value and label are the same text
    pub fn from_values(values: &[&str]) -> Vec<Self> {
        values
            .iter()
            .map(|value| Self {
                value: value.to_string(),
                label: value.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_is_clamped() {
        let params = PaginationParams {
            page: 0,
            per_page: 1000,
        };
        assert_eq!(params.normalized().unwrap(), (1, 100));
        assert_eq!(PaginationParams::default().normalized().unwrap(), (1, 20));
    }

    #[test]
    fn page_past_any_offset_is_rejected() {
        let params = PaginationParams {
            page: u64::MAX,
            per_page: 100,
        };
        assert!(matches!(
            params.normalized(),
            Err(ServiceError::InvalidInput(_))
        ));

        let last_page = PaginationParams {
            page: (i64::MAX as u64) / 100 + 1,
            per_page: 100,
        };
        assert!(last_page.normalized().is_ok());
    }

    #[test]
    fn options_keep_value_and_label() {
        let options = SelectOption::from_pairs(&[("g", "Grams (g)")]);
        assert_eq!(options[0].value, "g");
        assert_eq!(options[0].label, "Grams (g)");
        assert_eq!(SelectOption::from_values(&["Gold"])[0].label, "Gold");
    }
}
