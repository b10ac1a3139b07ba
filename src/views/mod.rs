//! Server-rendered pages: the receive form and the printable receipt.

use crate::{
    config::CompanyConfig,
    errors::ServiceError,
    models::{
        navigation::Navigation,
        receipt::{ReceiptData, ReceiptForm, RECEIPT_MATERIAL_TYPES, RECEIPT_UNITS},
    },
};
use serde::Serialize;
use tera::{Context, Tera};

/// Shown when a receive form submission could not be stored
pub const RECEIPT_SAVE_ALERT: &str = "Error saving material receipt. Please try again.";

/// Printed under "Terms & Conditions" on every receipt
pub const RECEIPT_TERMS: [&str; 3] = [
    "Material quality verified at the time of receipt",
    "Returns accepted within 24 hours of receipt",
    "Payment terms as per agreement",
];

const TEMPLATES: [(&str, &str); 3] = [
    ("layout.html", include_str!("templates/layout.html")),
    ("receive.html", include_str!("templates/receive.html")),
    ("receipt.html", include_str!("templates/receipt.html")),
];

#[derive(Serialize)]
struct CompanyView<'a> {
    name: &'a str,
    address: &'a str,
    contact: &'a str,
    gst: &'a str,
}

/// Renders pages inside the shared layout
pub struct PageRenderer {
    tera: Tera,
    navigation: Navigation,
    company: CompanyConfig,
}

impl PageRenderer {
    /// Compiles the embedded templates
    pub fn new(company: CompanyConfig) -> Result<Self, ServiceError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        tera.autoescape_on(vec![".html"]);

        let navigation = Navigation::new(company.name.clone());
        Ok(Self {
            tera,
            navigation,
            company,
        })
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    fn page_context(&self, active_href: &str) -> Context {
        let mut context = Context::new();
        context.insert("nav", &self.navigation);
        context.insert("active_href", active_href);
        context
    }

    /// The receive form, optionally with the save-failure alert
    pub fn receive_form(&self, form: &ReceiptForm, alert: Option<&str>) -> Result<String, ServiceError> {
        let mut context = self.page_context("/materials");
        context.insert("form", form);
        context.insert("total", &form.total());
        context.insert("material_types", &RECEIPT_MATERIAL_TYPES);
        context.insert("units", &RECEIPT_UNITS);
        context.insert("alert", &alert);

        Ok(self.tera.render("receive.html", &context)?)
    }

    /// Printable receipt
    pub fn receipt(&self, receipt: &ReceiptData) -> Result<String, ServiceError> {
        let mut context = self.page_context("/materials");
        context.insert("receipt", receipt);
        context.insert(
            "company",
            &CompanyView {
                name: &self.company.name,
                address: &self.company.address,
                contact: &self.company.contact,
                gst: &self.company.gst,
            },
        );
        context.insert("terms", &RECEIPT_TERMS);

        Ok(self.tera.render("receipt.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new(CompanyConfig::default()).unwrap()
    }

    fn receipt() -> ReceiptData {
        ReceiptData {
            receipt_number: "REC240220123".into(),
            date: "20 February 2024 at 02:30 pm".into(),
            supplier_name: "Rajesh Jewellers".into(),
            material_type: "Gold".into(),
            purity: "22K".into(),
            weight: "10".into(),
            unit: "grams".into(),
            purchase_price: "100".into(),
            po_number: "PO123".into(),
            total_amount: "1000.00".into(),
        }
    }

    #[test]
    fn receipt_contains_every_printed_block() {
        let html = renderer().receipt(&receipt()).unwrap();
        for expected in [
            "Material Receipt",
            "Receipt No: REC240220123",
            "Jewellery Management System",
            "123 Business Street",
            "GST: 12ABCDE3456F7Z8",
            "PO Number: PO123",
            "10 grams",
            "&#8377;1000.00",
            "Returns accepted within 24 hours of receipt",
            "Authorized Signature",
            "This is a computer generated receipt",
        ] {
            assert!(html.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn receipt_escapes_submitted_text() {
        let mut data = receipt();
        data.supplier_name = "<script>alert(1)</script>".into();
        let html = renderer().receipt(&data).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn receive_form_keeps_typed_values_and_shows_alert() {
        let form = ReceiptForm {
            supplier_name: "Rajesh Jewellers".into(),
            material_type: "Silver".into(),
            weight: "10".into(),
            purchase_price: "100".into(),
            ..Default::default()
        };
        let html = renderer()
            .receive_form(&form, Some(RECEIPT_SAVE_ALERT))
            .unwrap();

        assert!(html.contains(RECEIPT_SAVE_ALERT));
        assert!(html.contains("value=\"Rajesh Jewellers\""));
        assert!(html.contains("<option value=\"Silver\" selected>"));
        assert!(html.contains("&#8377;1000.00"));
    }

    #[test]
    fn blank_form_has_no_alert() {
        let html = renderer().receive_form(&ReceiptForm::default(), None).unwrap();
        assert!(!html.contains("role=\"alert\""));
        assert!(html.contains("&#8377;0.00"));
        assert!(html.contains("<option value=\"grams\" selected>"));
    }
}
