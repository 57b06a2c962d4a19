//! Server factory for creating test server entities.
//!
//! Provides factory methods for creating server rows with unique defaults so tests never
//! trip over the unique `name` / `address` constraints by accident.

use crate::factory::helpers::{address_for, next_id};
use entity::server::ServerStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db)
///     .name("Database Server")
///     .address("192.168.1.20")
///     .running()
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    status: ServerStatus,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"` where id is auto-incremented
    /// - address: `"10.x.y.z"` derived from the same id
    /// - status: `STOPPED`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            address: address_for(id),
            status: ServerStatus::Stopped,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the server status.
    pub fn status(mut self, status: ServerStatus) -> Self {
        self.status = status;
        self
    }

    /// Shorthand for `status(ServerStatus::Running)`.
    pub fn running(self) -> Self {
        self.status(ServerStatus::Running)
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert, including unique violations
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stopped server with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}

/// Creates a running server with default values.
pub async fn create_running_server(
    db: &DatabaseConnection,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).running().build().await
}
