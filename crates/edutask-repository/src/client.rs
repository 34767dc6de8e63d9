//! MongoDB client management.

use crate::dao::{DocumentCollection, MongoCollection};
use async_trait::async_trait;
use bson::{doc, Document};
use edutask_config::DatabaseConfig;
use edutask_core::{EdutaskError, EdutaskResult, HealthCheck, HealthStatus, Interface};
use mongodb::{options::ClientOptions, Client, Database};
use shaku::Component;
use std::sync::Arc;
use tracing::{info, warn};

/// Interface for database client operations.
///
/// Components that own a collection resolve it through this trait, so a
/// module can be built over a test double instead of a live server.
#[async_trait]
pub trait DatabaseClientInterface: Interface + Send + Sync {
    /// Returns the named collection of the bound database.
    fn document_collection(&self, name: &str) -> Arc<dyn DocumentCollection>;

    /// Checks if the server answers a `ping`.
    async fn health_check(&self) -> EdutaskResult<()>;
}

/// Connected MongoDB client bound to the configured database.
///
/// The driver keeps its own connection pool; cloning is cheap and shares it.
#[derive(Clone, Component)]
#[shaku(interface = DatabaseClientInterface)]
pub struct DatabaseClient {
    client: Client,
    database: Database,
}

impl DatabaseClient {
    /// Creates a new client from configuration.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first request (or [`health_check`](Self::health_check)), not here.
    pub async fn connect(config: &DatabaseConfig) -> EdutaskResult<Self> {
        info!("Connecting to MongoDB database '{}'...", config.name);

        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            warn!("Invalid MongoDB connection string: {}", e);
            EdutaskError::Database(format!("Invalid connection string: {}", e))
        })?;
        options.app_name = config.app_name.clone();
        options.min_pool_size = Some(config.min_pool_size);
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.server_selection_timeout());

        let client = Client::with_options(options).map_err(|e| {
            warn!("Failed to create MongoDB client: {}", e);
            EdutaskError::Database(format!("Failed to connect: {}", e))
        })?;
        let database = client.database(&config.name);

        info!("MongoDB client ready");
        Ok(Self { client, database })
    }

    /// Returns the underlying driver client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Returns the bound database.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Returns a handle to a collection of the bound database.
    #[must_use]
    pub fn collection(&self, name: &str) -> MongoCollection {
        MongoCollection::new(self.database.collection::<Document>(name))
    }

    /// Checks if the server answers a `ping`.
    pub async fn health_check(&self) -> EdutaskResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| EdutaskError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the client, waiting for in-flight operations to finish.
    pub async fn shutdown(self) {
        info!("Closing MongoDB client...");
        self.client.shutdown().await;
        info!("MongoDB client closed");
    }
}

#[async_trait]
impl DatabaseClientInterface for DatabaseClient {
    fn document_collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(self.collection(name))
    }

    async fn health_check(&self) -> EdutaskResult<()> {
        DatabaseClient::health_check(self).await
    }
}

#[async_trait]
impl HealthCheck for DatabaseClient {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn check(&self) -> HealthStatus {
        match self.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::fmt::Debug for DatabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseClient")
            .field("database", &self.database.name())
            .finish()
    }
}
