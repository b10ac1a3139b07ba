//! Form submissions that are acknowledged but never stored.

pub mod issue_material_command;
pub mod register_artisan_command;
pub mod register_supplier_command;
pub mod return_material_command;

pub use issue_material_command::IssueMaterialCommand;
pub use register_artisan_command::RegisterArtisanCommand;
pub use register_supplier_command::RegisterSupplierCommand;
pub use return_material_command::ReturnMaterialCommand;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reply to a form submission: where the user goes next, if anywhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormAcknowledgement {
    pub accepted: bool,
    pub redirect_to: Option<String>,
}

impl FormAcknowledgement {
    pub fn redirect(path: &str) -> Self {
        Self {
            accepted: true,
            redirect_to: Some(path.to_string()),
        }
    }

    pub fn stay() -> Self {
        Self {
            accepted: true,
            redirect_to: None,
        }
    }
}
