//! Server data repository for database operations.
//!
//! Provides the `ServerRepository` for managing rows of the `servers` table. The
//! repository applies no business rules: uniqueness is enforced by the table's
//! constraints and surfaces as a `DbErr`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::server::{CreateServerParam, Server, ServerStatus};

/// Repository providing database operations for server records.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new server with the given initial status.
    ///
    /// # Arguments
    /// - `param` - Name and address of the new server
    /// - `status` - Initial status to persist
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server with its generated ID
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(
        &self,
        param: CreateServerParam,
        status: ServerStatus,
    ) -> Result<Server, DbErr> {
        let entity = entity::server::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            status: ActiveValue::Set(status.into_entity()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    /// Gets every server ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }

    /// Finds a server by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - The server exists
    /// - `Ok(None)` - No server with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Finds a server by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find()
            .filter(entity::server::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Overwrites a server's name.
    ///
    /// # Arguments
    /// - `id` - ID of the server to rename
    /// - `name` - New name
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server
    /// - `Err(DbErr::RecordNotFound)` - No server exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including unique constraint violations
    pub async fn update_name(&self, id: i64, name: String) -> Result<Server, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(Server::from_entity(entity))
    }

    /// Overwrites a server's status.
    ///
    /// The value is written even when it equals the stored one.
    ///
    /// # Returns
    /// - `Ok(Server)` - The updated server
    /// - `Err(DbErr::RecordNotFound)` - No server exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update_status(&self, id: i64, status: ServerStatus) -> Result<Server, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.status = ActiveValue::Set(status.into_entity());

        let entity = active_model.update(self.db).await?;

        Ok(Server::from_entity(entity))
    }

    /// Deletes a server only while its stored status is STOPPED.
    ///
    /// The status check is part of the DELETE statement, so a row started after the
    /// caller last read it is left in place.
    ///
    /// # Returns
    /// - `Ok(1)` - The server was deleted
    /// - `Ok(0)` - No stopped server with this ID exists
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_if_stopped(&self, id: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Server::delete_many()
            .filter(entity::server::Column::Id.eq(id))
            .filter(entity::server::Column::Status.eq(entity::server::ServerStatus::Stopped))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts all servers.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Server::find().count(self.db).await
    }

    async fn find_active_model(&self, id: i64) -> Result<entity::server::ActiveModel, DbErr> {
        let server = entity::prelude::Server::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Server with id {} not found",
                id
            )))?;

        Ok(server.into())
    }
}

#[cfg(test)]
mod test;
