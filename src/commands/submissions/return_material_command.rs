use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use super::FormAcknowledgement;
use crate::{
    commands::Command, db::DbPool, errors::ServiceError, models::material_return::ReturnForm,
};

/// Records nothing; the return form stays on its page after submitting
#[derive(Debug, Clone)]
pub struct ReturnMaterialCommand {
    pub form: ReturnForm,
}

#[async_trait]
impl Command for ReturnMaterialCommand {
    type Result = FormAcknowledgement;

    #[instrument(skip(self, _db_pool))]
    async fn execute(&self, _db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        self.form.validate()?;

        info!(
            issue_id = %self.form.issue_id,
            artisan_id = %self.form.artisan_id,
            returned = %self.form.returned_quantity,
            wastage = %self.form.wastage_quantity,
            unit = %self.form.unit,
            "Material return submitted"
        );

        Ok(FormAcknowledgement::stay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::establish_connection;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn return_form_is_acknowledged_without_redirect() {
        let pool = Arc::new(establish_connection("sqlite::memory:").await.unwrap());
        let command = ReturnMaterialCommand {
            form: ReturnForm {
                issue_id: "ISS001".into(),
                artisan_id: "ART001".into(),
                material_type: "gold-22k".into(),
                returned_quantity: "95".into(),
                wastage_quantity: "5".into(),
                ..Default::default()
            },
        };

        let ack = command.execute(pool).await.unwrap();
        assert_eq!(ack, FormAcknowledgement::stay());
    }

    #[tokio::test]
    async fn incomplete_return_is_a_validation_error() {
        let pool = Arc::new(establish_connection("sqlite::memory:").await.unwrap());
        let command = ReturnMaterialCommand {
            form: ReturnForm::default(),
        };
        assert_matches!(
            command.execute(pool).await,
            Err(ServiceError::ValidationError(_))
        );
    }
}
