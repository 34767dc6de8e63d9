//! # Edutask Server
//!
//! Connects to the document store, applies the collection schemas the DAOs
//! depend on, checks the connection and wires the application components.

use edutask_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use edutask_core::EdutaskResult;
use edutask_repository::{
    DatabaseClient, DatabaseClientInterface, TODO_COLLECTION, USER_COLLECTION,
};
use edutask_server::{
    di::{build_app_module, DatabaseResolver},
    startup,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    startup::print_banner();

    info!("Starting Edutask...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> EdutaskResult<()> {
    let client = DatabaseClient::connect(&config.database).await?;
    startup::verify_health(&client).await?;

    let schemas = startup::bootstrap_schemas(&client, &config.schema).await?;

    let module = build_app_module(&client);
    module.database().health_check().await?;
    info!(
        "Application module ready for '{}' and '{}'",
        TODO_COLLECTION, USER_COLLECTION
    );
    startup::print_startup_info(&config, &schemas);

    drop(module);
    client.shutdown().await;
    info!("Edutask shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}
