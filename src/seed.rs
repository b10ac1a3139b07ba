//! Sample records every page starts with. Nothing here is read from the database.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    artisan::{Artisan, ArtisanStatus, MaterialQuantity, StatusHistoryEntry},
    audit::{AuditLog, PersonType, TransactionType},
    dashboard::{ActivityItem, Dashboard, QuickAction, StatCard, Trend},
    issue::{IssueStatus, MaterialIssue},
    manufacturing::{Department, ManufacturingOrder, OrderStatus, ProcessStep, StepStatus},
    material::{MaterialStock, StockStatus},
    material_return::{IssueReference, MaterialReturn, ReturnStatus},
    supplier::{SupplierCard, SupplierStatus},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hh, mm, 0).unwrap_or_default()
}

fn qty(material: &str, amount: &str) -> MaterialQuantity {
    MaterialQuantity::new(material, amount)
}

pub fn artisans() -> Vec<Artisan> {
    vec![
        Artisan {
            id: "ART001".into(),
            name: "Rahul Kumar".into(),
            specialization: "Gold Jewelry".into(),
            current_assignment: "Necklace Design #NK102".into(),
            materials_issued: vec![qty("Gold", "100g"), qty("Diamonds", "5ct")],
            status: ArtisanStatus::Active,
            status_history: vec![StatusHistoryEntry {
                status: ArtisanStatus::Active,
                start_date: date(2024, 1, 1),
                end_date: None,
                notes: Some("Regular work schedule".into()),
            }],
            initials: "RK".into(),
            experience: "8 years".into(),
            completed_projects: 156,
            rating: 4.8,
            contact_number: "+91 98765 43210".into(),
            address: "Workshop #12, Jewelry Market".into(),
        },
        Artisan {
            id: "ART002".into(),
            name: "Amit Singh".into(),
            specialization: "Silver Jewelry".into(),
            current_assignment: "Bracelet Set #BR045".into(),
            materials_issued: vec![qty("Silver", "450g")],
            status: ArtisanStatus::OnBreak,
            status_history: vec![
                StatusHistoryEntry {
                    status: ArtisanStatus::Active,
                    start_date: date(2024, 1, 1),
                    end_date: Some(date(2024, 2, 15)),
                    notes: Some("Regular work schedule".into()),
                },
                StatusHistoryEntry {
                    status: ArtisanStatus::OnBreak,
                    start_date: date(2024, 2, 15),
                    end_date: None,
                    notes: Some("Personal leave".into()),
                },
            ],
            initials: "AS".into(),
            experience: "5 years".into(),
            completed_projects: 89,
            rating: 4.5,
            contact_number: "+91 98765 43211".into(),
            address: "Workshop #15, Jewelry Market".into(),
        },
    ]
}

pub fn suppliers() -> Vec<SupplierCard> {
    vec![
        SupplierCard {
            name: "Rajesh Jewellers".into(),
            tagline: "Gold & Diamond Supplier".into(),
            status: SupplierStatus::Active,
            email: "rajesh@example.com".into(),
            phone: "+91 98765 43210".into(),
            location: "Mumbai, Maharashtra".into(),
            last_order: "2 days ago".into(),
            total_orders: 24,
        },
        SupplierCard {
            name: "Silver Trade Co.".into(),
            tagline: "Silver Specialist".into(),
            status: SupplierStatus::Active,
            email: "contact@silvertrade.com".into(),
            phone: "+91 98765 12345".into(),
            location: "Delhi, India".into(),
            last_order: "1 week ago".into(),
            total_orders: 18,
        },
    ]
}

pub fn materials() -> Vec<MaterialStock> {
    let stock = |symbol: &str,
                 material: &str,
                 category: &str,
                 purity: &str,
                 current: &str,
                 unit: &str,
                 updated: &str,
                 status: StockStatus| MaterialStock {
        symbol: symbol.into(),
        material: material.into(),
        category: category.into(),
        purity: purity.into(),
        current_stock: current.into(),
        unit: unit.into(),
        last_updated: updated.into(),
        status,
    };

    vec![
        stock("Au", "Gold", "Precious Metal", "22K", "1,250g", "Grams", "2 hours ago", StockStatus::InStock),
        stock("Ag", "Silver", "Precious Metal", "99.9%", "5,800g", "Grams", "5 hours ago", StockStatus::InStock),
        stock("D", "Diamond", "Precious Stone", "VVS1", "100ct", "Carats", "1 day ago", StockStatus::LowStock),
    ]
}

pub fn issues() -> Vec<MaterialIssue> {
    vec![
        MaterialIssue {
            id: "ISS001".into(),
            artisan_id: "ART001".into(),
            artisan_name: "Rahul Kumar".into(),
            artisan_initials: "RK".into(),
            materials: vec![qty("Gold", "100g"), qty("Diamonds", "5ct")],
            issue_date: date(2024, 2, 20),
            expected_return: date(2024, 2, 25),
            status: IssueStatus::Active,
        },
        MaterialIssue {
            id: "ISS002".into(),
            artisan_id: "ART002".into(),
            artisan_name: "Amit Singh".into(),
            artisan_initials: "AS".into(),
            materials: vec![qty("Silver", "450g")],
            issue_date: date(2024, 2, 18),
            expected_return: date(2024, 2, 23),
            status: IssueStatus::DueToday,
        },
    ]
}

/// Issues offered on the return form
pub fn issue_references() -> Vec<IssueReference> {
    vec![
        IssueReference {
            id: "ISS001".into(),
            label: "ISS001 - Gold (100g) - Rahul Kumar".into(),
        },
        IssueReference {
            id: "ISS002".into(),
            label: "ISS002 - Silver (450g) - Amit Singh".into(),
        },
    ]
}

pub fn returns() -> Vec<MaterialReturn> {
    vec![
        MaterialReturn {
            id: "RET001".into(),
            artisan_id: "ART001".into(),
            artisan_name: "Rahul Kumar".into(),
            artisan_initials: "RK".into(),
            returned: vec![qty("Gold", "95g"), qty("Diamonds", "5ct")],
            wastage: vec![qty("Gold", "5g")],
            return_date: date(2024, 2, 20),
            status: ReturnStatus::Verified,
        },
        MaterialReturn {
            id: "RET002".into(),
            artisan_id: "ART002".into(),
            artisan_name: "Amit Singh".into(),
            artisan_initials: "AS".into(),
            returned: vec![qty("Silver", "440g")],
            wastage: vec![qty("Silver", "10g")],
            return_date: date(2024, 2, 19),
            status: ReturnStatus::PendingVerification,
        },
    ]
}

pub fn audit_logs() -> Vec<AuditLog> {
    vec![
        AuditLog {
            id: "AUD001".into(),
            timestamp: at(2024, 2, 20, 14, 30),
            transaction_type: TransactionType::MaterialReturn,
            material: "Gold".into(),
            material_type: "22K".into(),
            quantity: "95g".into(),
            wastage: Some("5g".into()),
            person_name: "Rahul Kumar".into(),
            person_type: PersonType::Artisan,
            reference: "#RET001".into(),
        },
        AuditLog {
            id: "AUD002".into(),
            timestamp: at(2024, 2, 20, 10, 15),
            transaction_type: TransactionType::MaterialIssue,
            material: "Gold".into(),
            material_type: "22K".into(),
            quantity: "100g".into(),
            wastage: None,
            person_name: "Rahul Kumar".into(),
            person_type: PersonType::Artisan,
            reference: "#ISS001".into(),
        },
        AuditLog {
            id: "AUD003".into(),
            timestamp: at(2024, 2, 19, 16, 45),
            transaction_type: TransactionType::MaterialReceipt,
            material: "Gold".into(),
            material_type: "22K".into(),
            quantity: "1000g".into(),
            wastage: None,
            person_name: "Rajesh Jewellers".into(),
            person_type: PersonType::Supplier,
            reference: "#PO123".into(),
        },
    ]
}

pub fn departments() -> Vec<Department> {
    [
        ("DEPT001", "Casting", "Initial metal casting and mold preparation"),
        ("DEPT002", "Filing", "Smoothing and shaping the cast pieces"),
        ("DEPT003", "Stone Setting", "Setting diamonds and precious stones"),
        ("DEPT004", "Polishing", "Final polish and finishing"),
        ("DEPT005", "Quality Check", "Final quality inspection"),
    ]
    .into_iter()
    .map(|(id, name, description)| Department {
        id: id.into(),
        name: name.into(),
        description: description.into(),
    })
    .collect()
}

pub fn manufacturing_orders() -> Vec<ManufacturingOrder> {
    vec![ManufacturingOrder {
        id: "MFG001".into(),
        order_number: "ORD123".into(),
        product_name: "Diamond Necklace".into(),
        design_number: "DN789".into(),
        start_date: date(2024, 2, 20),
        expected_end_date: date(2024, 3, 5),
        status: OrderStatus::InProgress,
        total_gold_issued: 500.0,
        current_gold_used: 420.0,
        wastage: 15.0,
        artisan_id: "ART001".into(),
        artisan_name: "Rahul Kumar".into(),
        current_department: "Stone Setting".into(),
        process_steps: vec![
            ProcessStep {
                id: "STEP001".into(),
                department_id: "DEPT001".into(),
                start_date: date(2024, 2, 20),
                end_date: Some(date(2024, 2, 22)),
                material_used: 500.0,
                wastage: 8.0,
                status: StepStatus::Completed,
                notes: Some("Initial casting completed with minimal wastage".into()),
            },
            ProcessStep {
                id: "STEP002".into(),
                department_id: "DEPT002".into(),
                start_date: date(2024, 2, 22),
                end_date: Some(date(2024, 2, 25)),
                material_used: 492.0,
                wastage: 7.0,
                status: StepStatus::Completed,
                notes: Some("Filing and shaping completed".into()),
            },
            ProcessStep {
                id: "STEP003".into(),
                department_id: "DEPT003".into(),
                start_date: date(2024, 2, 25),
                end_date: None,
                material_used: 485.0,
                wastage: 0.0,
                status: StepStatus::InProgress,
                notes: Some("Stone setting in progress".into()),
            },
        ],
    }]
}

pub fn dashboard() -> Dashboard {
    let card = |title: &str, value: &str, caption: &str, change: &str, trend| StatCard {
        title: title.into(),
        value: value.into(),
        caption: caption.into(),
        change: change.into(),
        trend,
    };
    let item = |summary: &str, person: &str, when: &str, status: &str| ActivityItem {
        summary: summary.into(),
        person: person.into(),
        when: when.into(),
        status: status.into(),
    };
    let action = |label: &str, href: &str| QuickAction {
        label: label.into(),
        href: href.into(),
    };

    Dashboard {
        stats: vec![
            card("Total Gold Stock", "1,250g", "22K", "2.5%", Trend::Up),
            card("Total Silver Stock", "5,800g", "99.9%", "1.2%", Trend::Down),
            card("Active Orders", "24", "Orders", "4 new", Trend::Up),
            card("Completed Orders", "156", "This Month", "12%", Trend::Up),
        ],
        recent_issues: vec![
            item("Gold - 100g", "Rahul Kumar", "2 hours ago", "Active"),
            item("Diamonds - 10ct", "Amit Singh", "5 hours ago", "Pending"),
        ],
        recent_returns: vec![
            item("Gold - 95g (5g wastage)", "Rahul Kumar", "1 hour ago", "Verified"),
            item("Silver - 450g (10g wastage)", "Amit Singh", "3 hours ago", "Pending"),
        ],
        quick_actions: vec![
            action("New Receipt", "/materials/receive"),
            action("Issue Material", "/materials/issue"),
            action("Record Return", "/materials/return"),
            action("View Audit Log", "/audit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_artisan_has_one_open_history_entry() {
        for artisan in artisans() {
            let open = artisan.status_history.iter().filter(|e| e.is_open()).count();
            assert_eq!(open, 1, "{}", artisan.id);
            assert_eq!(artisan.open_entry().map(|e| e.status), Some(artisan.status));
        }
    }

    #[test]
    fn sample_order_steps_reference_known_departments() {
        let departments = departments();
        for order in manufacturing_orders() {
            for step in &order.process_steps {
                assert!(departments.iter().any(|d| d.id == step.department_id));
            }
        }
    }

    #[test]
    fn audit_rows_are_newest_first() {
        let logs = audit_logs();
        assert!(logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
