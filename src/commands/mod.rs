use crate::{db::DbPool, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

/// Command trait for implementing the Command Pattern
///
/// A command carries everything one business operation needs, checks its own
/// input, and runs against the shared connection pool.
#[async_trait]
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command
    ///
    /// # Arguments
    /// * `db_pool` - Database connection pool for persistence operations
    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError>;
}

pub mod receipts;
pub mod submissions;
