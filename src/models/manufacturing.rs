use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    #[strum(serialize = "On Hold")]
    OnHold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
pub enum StepStatus {
    Pending,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
}

/// A workshop stage an order passes through
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub department_id: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub material_used: f64,
    pub wastage: f64,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Manufacturing order. Usage is not checked against the issued amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturingOrder {
    pub id: String,
    pub order_number: String,
    pub product_name: String,
    pub design_number: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub status: OrderStatus,
    pub total_gold_issued: f64,
    pub current_gold_used: f64,
    pub wastage: f64,
    pub artisan_id: String,
    pub artisan_name: String,
    pub current_department: String,
    pub process_steps: Vec<ProcessStep>,
}

impl ManufacturingOrder {
    pub fn completed_steps(&self) -> usize {
        self.process_steps
            .iter()
            .filter(|step| step.status == StepStatus::Completed)
            .count()
    }

    /// Completed steps over the department count, as a percentage.
    ///
    /// Not clamped: more completed steps than departments yields over 100.
    pub fn progress(&self, department_count: usize) -> f64 {
        if department_count == 0 {
            return 0.0;
        }
        self.completed_steps() as f64 / department_count as f64 * 100.0
    }
}

/// A process step with its department resolved for the timeline view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub department_name: String,
    #[serde(flatten)]
    pub step: ProcessStep,
}

/// Order row on the manufacturing page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: ManufacturingOrder,
    pub progress: f64,
}

/// Expanded order with material summary and resolved timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub order_number: String,
    pub product_name: String,
    pub design_number: String,
    pub status: OrderStatus,
    pub artisan_name: String,
    pub current_department: String,
    pub total_gold_issued: f64,
    pub current_gold_used: f64,
    pub wastage: f64,
    pub progress: f64,
    pub timeline: Vec<TimelineStep>,
}

impl OrderDetails {
    pub fn new(order: &ManufacturingOrder, departments: &[Department]) -> Self {
        let timeline = order
            .process_steps
            .iter()
            .map(|step| TimelineStep {
                department_name: department_name(departments, &step.department_id),
                step: step.clone(),
            })
            .collect();

        Self {
            id: order.id.clone(),
            order_number: order.order_number.clone(),
            product_name: order.product_name.clone(),
            design_number: order.design_number.clone(),
            status: order.status,
            artisan_name: order.artisan_name.clone(),
            current_department: order.current_department.clone(),
            total_gold_issued: order.total_gold_issued,
            current_gold_used: order.current_gold_used,
            wastage: order.wastage,
            progress: order.progress(departments.len()),
            timeline,
        }
    }
}

/// Department name for an id, or the id itself when unknown
pub fn department_name(departments: &[Department], id: &str) -> String {
    departments
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, dept: &str, status: StepStatus) -> ProcessStep {
        ProcessStep {
            id: id.into(),
            department_id: dept.into(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            end_date: None,
            material_used: 10.0,
            wastage: 0.5,
            status,
            notes: None,
        }
    }

    fn order(steps: Vec<ProcessStep>) -> ManufacturingOrder {
        ManufacturingOrder {
            id: "MFG900".into(),
            order_number: "ORD900".into(),
            product_name: "Test Ring".into(),
            design_number: "TR1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            expected_end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: OrderStatus::InProgress,
            total_gold_issued: 50.0,
            current_gold_used: 40.0,
            wastage: 1.0,
            artisan_id: "ART001".into(),
            artisan_name: "Rahul Kumar".into(),
            current_department: "Filing".into(),
            process_steps: steps,
        }
    }

    #[test]
    fn progress_counts_only_completed_steps() {
        let o = order(vec![
            step("S1", "D1", StepStatus::Completed),
            step("S2", "D2", StepStatus::Completed),
            step("S3", "D3", StepStatus::InProgress),
        ]);
        assert_eq!(o.progress(5), 40.0);
    }

    #[test]
    fn progress_is_not_clamped() {
        let steps = (0..6)
            .map(|i| step(&format!("S{i}"), "D1", StepStatus::Completed))
            .collect();
        assert!(order(steps).progress(5) > 100.0);
    }

    #[test]
    fn no_departments_means_no_progress() {
        let o = order(vec![step("S1", "D1", StepStatus::Completed)]);
        assert_eq!(o.progress(0), 0.0);
    }

    #[test]
    fn unknown_department_falls_back_to_id() {
        let departments = vec![Department {
            id: "D1".into(),
            name: "Casting".into(),
            description: String::new(),
        }];
        assert_eq!(department_name(&departments, "D1"), "Casting");
        assert_eq!(department_name(&departments, "D9"), "D9");
    }

    #[test]
    fn status_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_value(OrderStatus::InProgress).unwrap(),
            serde_json::json!("In Progress")
        );
        assert_eq!(StepStatus::InProgress.to_string(), "In Progress");
    }
}
