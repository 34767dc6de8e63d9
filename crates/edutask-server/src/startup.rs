//! Server startup utilities.

use edutask_config::{AppConfig, SchemaConfig};
use edutask_core::{EdutaskError, EdutaskResult, HealthCheck, HealthStatus};
use edutask_repository::{CollectionSchema, DatabaseClient, SchemaBootstrap};
use tracing::{info, warn};

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ______    __      __             __
   / ____/___/ /_  __/ /_____ ______/ /__
  / __/ / __  / / / / __/ __ `/ ___/ //_/
 / /___/ /_/ / /_/ / /_/ /_/ (__  ) ,<
/_____/\__,_/\__,_/\__/\__,_/____/_/|_|
    "#);
}

/// Loads every configured collection schema and applies it to the database.
///
/// Returns the applied schemas.
pub async fn bootstrap_schemas(
    client: &DatabaseClient,
    config: &SchemaConfig,
) -> EdutaskResult<Vec<CollectionSchema>> {
    let schemas = CollectionSchema::load_all(config)?;
    SchemaBootstrap::apply_all(client.database(), &schemas).await?;
    info!("Applied {} collection schema(s)", schemas.len());
    Ok(schemas)
}

/// Runs a health check and fails if the component is unhealthy.
pub async fn verify_health(check: &dyn HealthCheck) -> EdutaskResult<()> {
    match check.check().await {
        HealthStatus::Healthy => {
            info!("{}: healthy", check.name());
            Ok(())
        }
        HealthStatus::Degraded(reason) => {
            warn!("{}: degraded ({})", check.name(), reason);
            Ok(())
        }
        HealthStatus::Unhealthy(reason) => Err(EdutaskError::Database(format!(
            "{} is unhealthy: {}",
            check.name(),
            reason
        ))),
    }
}

/// Prints a summary of the running configuration.
pub fn print_startup_info(config: &AppConfig, schemas: &[CollectionSchema]) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Database:    {}", config.database.name);
    for schema in schemas {
        if schema.unique.is_empty() {
            info!("Collection:  {}", schema.collection);
        } else {
            info!(
                "Collection:  {} (unique: {})",
                schema.collection,
                schema.unique.join(", ")
            );
        }
    }
    info!("{}", separator);
}
