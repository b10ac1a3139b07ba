use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use super::FormAcknowledgement;
use crate::{commands::Command, db::DbPool, errors::ServiceError, models::issue::IssueForm};

#[derive(Debug, Clone)]
pub struct IssueMaterialCommand {
    pub form: IssueForm,
}

#[async_trait]
impl Command for IssueMaterialCommand {
    type Result = FormAcknowledgement;

    #[instrument(skip(self, _db_pool))]
    async fn execute(&self, _db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        self.form.validate()?;

        info!(
            artisan_id = %self.form.artisan_id,
            material_type = %self.form.material_type,
            quantity = %self.form.quantity,
            unit = %self.form.unit,
            expected_return = %self.form.expected_return,
            "Material issue submitted"
        );

        Ok(FormAcknowledgement::redirect("/issues"))
    }
}
