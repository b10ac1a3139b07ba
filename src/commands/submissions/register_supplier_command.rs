use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use super::FormAcknowledgement;
use crate::{
    commands::Command, db::DbPool, errors::ServiceError, models::supplier::NewSupplierForm,
};

#[derive(Debug, Clone)]
pub struct RegisterSupplierCommand {
    pub form: NewSupplierForm,
}

#[async_trait]
impl Command for RegisterSupplierCommand {
    type Result = FormAcknowledgement;

    #[instrument(skip(self, _db_pool))]
    async fn execute(&self, _db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        self.form
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        info!(
            name = %self.form.name,
            gst_number = %self.form.gst_number,
            material_types = ?self.form.material_types,
            "Supplier form submitted"
        );

        Ok(FormAcknowledgement::redirect("/suppliers"))
    }
}
