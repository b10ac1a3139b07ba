use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jewellery_tracker::{config, db, migrator::Migrator};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Applies or rolls back the receipt table migrations
#[derive(Debug, Parser)]
#[command(name = "migration", version, about)]
struct Cli {
    /// Overrides the configured database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply all pending migrations (default)
    Up,
    /// Roll back the last `steps` migrations
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Print applied and pending migrations
    Status,
    /// Drop every table and reapply all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => config::load_config()
            .context("failed to load configuration")?
            .database_url,
    };

    match cli.command.unwrap_or(Commands::Up) {
        Commands::Up => jewellery_tracker::migrator::run_migration(&database_url).await?,
        Commands::Down { steps } => {
            let pool = db::establish_connection(&database_url).await?;
            Migrator::down(&pool, Some(steps))
                .await
                .context("rollback failed")?;
            info!(steps, "Rolled back migrations");
        }
        Commands::Status => {
            let pool = db::establish_connection(&database_url).await?;
            Migrator::status(&pool).await.context("status failed")?;
        }
        Commands::Fresh => {
            let pool = db::establish_connection(&database_url).await?;
            Migrator::fresh(&pool).await.context("fresh failed")?;
            info!("Database recreated");
        }
    }

    Ok(())
}
