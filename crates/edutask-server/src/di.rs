//! Dependency injection module using Shaku.
//!
//! The connected [`DatabaseClient`] is the only parameterised component.
//! The user lookup and both controllers inject it and resolve their
//! collection by name.

use edutask_controller::{
    TodoController, TodoControllerInterface, UserController, UserControllerInterface,
};
use edutask_repository::{
    DatabaseClient, DatabaseClientInterface, DatabaseClientParameters, UserDao, UserLookup,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

// Application module for a single-process deployment:
// - database client
// - user lookup over the `user` collection
// - todo and user controllers
module! {
    pub AppModule {
        components = [
            DatabaseClient,
            UserDao,
            UserController,
            TodoController,
        ],
        providers = [],
    }
}

/// Builds the application module around a connected client.
pub fn build_app_module(client: &DatabaseClient) -> Arc<AppModule> {
    let module = AppModule::builder()
        .with_component_parameters::<DatabaseClient>(DatabaseClientParameters {
            client: client.inner().clone(),
            database: client.database().clone(),
        })
        .build();

    Arc::new(module)
}

/// Trait for resolving the controllers from a module.
pub trait ControllerResolver {
    /// Resolves the todo controller.
    fn todo_controller(&self) -> Arc<dyn TodoControllerInterface>;

    /// Resolves the user controller.
    fn user_controller(&self) -> Arc<dyn UserControllerInterface>;
}

impl ControllerResolver for AppModule {
    fn todo_controller(&self) -> Arc<dyn TodoControllerInterface> {
        self.resolve()
    }

    fn user_controller(&self) -> Arc<dyn UserControllerInterface> {
        self.resolve()
    }
}

/// Trait for resolving the repository layer from a module.
pub trait DatabaseResolver {
    /// Resolves the database client.
    fn database(&self) -> Arc<dyn DatabaseClientInterface>;

    /// Resolves the user lookup.
    fn user_lookup(&self) -> Arc<dyn UserLookup>;
}

impl DatabaseResolver for AppModule {
    fn database(&self) -> Arc<dyn DatabaseClientInterface> {
        self.resolve()
    }

    fn user_lookup(&self) -> Arc<dyn UserLookup> {
        self.resolve()
    }
}
