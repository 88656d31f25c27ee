//! Migrate command - applies schema changes from the CLI.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are driven explicitly here, so skip the automatic
    // run that `Database::connect` performs.
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => finish(db.run_migrations().await, "Applied pending migrations"),
        MigrateAction::Down => finish(db.rollback_migration().await, "Rolled back last migration"),
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(AppError::from)? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
            Ok(())
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables before re-running migrations");
            finish(db.fresh_migrations().await, "Rebuilt schema from scratch")
        }
    }
}

/// Log the outcome of a migration action, surfacing store errors.
fn finish(outcome: Result<(), DbErr>, done: &str) -> AppResult<()> {
    outcome?;
    tracing::info!("{}", done);
    Ok(())
}
