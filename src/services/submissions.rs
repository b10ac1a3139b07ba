use crate::{
    commands::{
        submissions::{
            FormAcknowledgement, IssueMaterialCommand, RegisterArtisanCommand,
            RegisterSupplierCommand, ReturnMaterialCommand,
        },
        Command,
    },
    db::DbPool,
    errors::ServiceError,
    models::{
        artisan::NewArtisanForm, issue::IssueForm, material_return::ReturnForm,
        supplier::NewSupplierForm,
    },
};
use std::sync::Arc;

/// Runs the form commands that log and acknowledge without storing
#[derive(Clone)]
pub struct SubmissionService {
    db_pool: Arc<DbPool>,
}

impl SubmissionService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    pub async fn register_artisan(
        &self,
        form: NewArtisanForm,
    ) -> Result<FormAcknowledgement, ServiceError> {
        RegisterArtisanCommand { form }
            .execute(self.db_pool.clone())
            .await
    }

    pub async fn register_supplier(
        &self,
        form: NewSupplierForm,
    ) -> Result<FormAcknowledgement, ServiceError> {
        RegisterSupplierCommand { form }
            .execute(self.db_pool.clone())
            .await
    }

    pub async fn issue_material(&self, form: IssueForm) -> Result<FormAcknowledgement, ServiceError> {
        IssueMaterialCommand { form }
            .execute(self.db_pool.clone())
            .await
    }

    pub async fn return_material(
        &self,
        form: ReturnForm,
    ) -> Result<FormAcknowledgement, ServiceError> {
        ReturnMaterialCommand { form }
            .execute(self.db_pool.clone())
            .await
    }
}
