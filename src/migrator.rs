use anyhow::Result;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::{error, info};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240220_000001_create_material_receipts_table::Migration),
            Box::new(m20240220_000002_index_material_receipts::Migration),
        ]
    }
}

mod m20240220_000001_create_material_receipts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240220_000001_create_material_receipts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Columns mirror entities::material_receipt::Model; receipt_number is not unique
            manager
                .create_table(
                    Table::create()
                        .table(MaterialReceipts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialReceipts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialReceipts::ReceiptNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialReceipts::Date)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialReceipts::SupplierName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialReceipts::MaterialType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialReceipts::Purity).string().not_null())
                        .col(
                            ColumnDef::new(MaterialReceipts::Weight)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(MaterialReceipts::Unit).string().not_null())
                        .col(
                            ColumnDef::new(MaterialReceipts::PurchasePrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(MaterialReceipts::PoNumber).string().null())
                        .col(
                            ColumnDef::new(MaterialReceipts::TotalAmount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(MaterialReceipts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialReceipts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum MaterialReceipts {
        Table,
        Id,
        ReceiptNumber,
        Date,
        SupplierName,
        MaterialType,
        Purity,
        Weight,
        Unit,
        PurchasePrice,
        PoNumber,
        TotalAmount,
        CreatedAt,
    }
}

mod m20240220_000002_index_material_receipts {

    use super::m20240220_000001_create_material_receipts_table::MaterialReceipts;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240220_000002_index_material_receipts"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_index(
                    Index::create()
                        .name("idx_material_receipts_receipt_number")
                        .table(MaterialReceipts::Table)
                        .col(MaterialReceipts::ReceiptNumber)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_material_receipts_created_at")
                        .table(MaterialReceipts::Table)
                        .col(MaterialReceipts::CreatedAt)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_index(
                    Index::drop()
                        .name("idx_material_receipts_created_at")
                        .table(MaterialReceipts::Table)
                        .to_owned(),
                )
                .await?;

            manager
                .drop_index(
                    Index::drop()
                        .name("idx_material_receipts_receipt_number")
                        .table(MaterialReceipts::Table)
                        .to_owned(),
                )
                .await
        }
    }
}

// Database migration CLI runner
pub async fn run_migration(db_url: &str) -> Result<()> {
    info!("Setting up database connection for migrations");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    info!("Running database migrations");

    match Migrator::up(&db, None).await {
        Ok(_) => {
            info!("Migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Migration failed: {}", e);
            Err(e.into())
        }
    }
}
