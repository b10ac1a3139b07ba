use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use super::FormAcknowledgement;
use crate::{commands::Command, db::DbPool, errors::ServiceError, models::artisan::NewArtisanForm};

#[derive(Debug, Clone)]
pub struct RegisterArtisanCommand {
    pub form: NewArtisanForm,
}

#[async_trait]
impl Command for RegisterArtisanCommand {
    type Result = FormAcknowledgement;

    #[instrument(skip(self, _db_pool))]
    async fn execute(&self, _db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError> {
        self.form.check()?;

        info!(
            name = %self.form.name,
            specialization = %self.form.specialization,
            skills = ?self.form.skills,
            "Artisan form submitted"
        );

        Ok(FormAcknowledgement::redirect("/artisans"))
    }
}
