//! Common test infrastructure for database integration tests.

use edutask_config::{DatabaseConfig, SchemaConfig};
use edutask_repository::{CollectionSchema, Dao, DatabaseClient, SchemaBootstrap};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

/// Test database container wrapper.
///
/// Manages a MongoDB testcontainer lifecycle and provides a client whose
/// collections already carry the shipped validators and indexes.
pub struct TestDatabase {
    _container: ContainerAsync<Mongo>,
    client: DatabaseClient,
}

impl TestDatabase {
    /// Creates a new test database with a fresh MongoDB container.
    ///
    /// Applies the schemas under `schemas/` after container startup.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let config = DatabaseConfig {
            url: format!("mongodb://127.0.0.1:{}", port),
            name: "edutask_test".to_string(),
            min_pool_size: 0,
            max_pool_size: 5,
            connect_timeout_secs: 30,
            server_selection_timeout_secs: 30,
            ..DatabaseConfig::default()
        };

        let client = Self::connect_with_retry(&config, 30).await;

        let schemas = CollectionSchema::load_all(&Self::schema_config())
            .expect("Failed to load schemas");
        SchemaBootstrap::apply_all(client.database(), &schemas)
            .await
            .expect("Failed to apply schemas");

        Self {
            _container: container,
            client,
        }
    }

    /// Returns the connected client.
    pub fn client(&self) -> &DatabaseClient {
        &self.client
    }

    /// Returns a DAO bound to `collection`.
    pub fn dao(&self, collection: &str) -> Dao {
        Dao::new(Arc::new(self.client.collection(collection)))
    }

    /// Schema configuration pointing at the workspace `schemas/` directory.
    pub fn schema_config() -> SchemaConfig {
        SchemaConfig {
            directory: format!("{}/../../schemas", env!("CARGO_MANIFEST_DIR")),
            collections: vec!["todo".to_string(), "user".to_string()],
        }
    }

    /// Connects and pings with retry logic.
    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabaseClient {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let result = match DatabaseClient::connect(config).await {
                Ok(client) => client.health_check().await.map(|_| client),
                Err(e) => Err(e),
            };
            match result {
                Ok(client) => return client,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!(
                            "Failed to connect to database after {} attempts: {}",
                            max_attempts, e
                        );
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
