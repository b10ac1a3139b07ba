use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Header, navigation and footer wrapped around every page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub title: String,
    pub links: Vec<NavLink>,
    pub footer_text: String,
    pub footer_links: Vec<NavLink>,
}

impl Navigation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: vec![
                NavLink::new("Dashboard", "/"),
                NavLink::new("Materials", "/materials"),
                NavLink::new("Suppliers", "/suppliers"),
                NavLink::new("Artisans", "/artisans"),
                NavLink::new("Issues", "/issues"),
                NavLink::new("Returns", "/returns"),
                NavLink::new("Audit Log", "/audit"),
            ],
            footer_text: "Efficient material tracking and management".to_string(),
            footer_links: vec![
                NavLink::new("Help", "/help"),
                NavLink::new("Contact", "/contact"),
                NavLink::new("Privacy", "/privacy"),
            ],
        }
    }

    /// Marks which link matches the requested path
    pub fn is_active(&self, link: &NavLink, path: &str) -> bool {
        if link.href == "/" {
            path == "/"
        } else {
            path.starts_with(&link.href)
        }
    }
}
