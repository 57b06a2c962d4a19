//! Business rules for server records.
//!
//! The store only knows about uniqueness; everything else lives here: new servers start
//! stopped, running servers cannot be deleted, and missing IDs and duplicate values are
//! reported as `ServerError` variants callers can match on.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::server::ServerRepository,
    domain::server::{CreateServerParam, Server, ServerStatus},
    error::{
        server::{ServerError, ServerField},
        AppError,
    },
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every server in the store's natural order
    pub async fn list(&self) -> Result<Vec<Server>, AppError> {
        let servers = ServerRepository::new(self.db).get_all().await?;

        Ok(servers)
    }

    /// Creates a new server, always in the STOPPED state
    ///
    /// # Arguments
    /// - `param` - Validated name and address
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server
    /// - `Err(AppError::ServerErr(UniquenessViolation))` - Name or address already in use
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, param: CreateServerParam) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);

        let name = param.name.clone();
        let address = param.address.clone();

        match repo.create(param, ServerStatus::Stopped).await {
            Ok(server) => {
                tracing::info!("Created server {} ({})", server.id, server.name);
                Ok(server)
            }
            Err(err) if is_unique_violation(&err) => {
                // Name collisions take precedence when both fields clash.
                let violation = if repo.find_by_name(&name).await?.is_some() {
                    ServerError::UniquenessViolation {
                        field: ServerField::Name,
                        value: name,
                    }
                } else {
                    ServerError::UniquenessViolation {
                        field: ServerField::Address,
                        value: address,
                    }
                };
                tracing::warn!("Rejected server creation: {}", violation);
                Err(violation.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites the name of an existing server
    ///
    /// # Returns
    /// - `Ok(Server)` - The renamed server
    /// - `Err(AppError::ServerErr(NotFound))` - No server with this ID
    /// - `Err(AppError::ServerErr(UniquenessViolation))` - Another server has this name
    pub async fn rename(&self, id: i64, name: String) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);

        match repo.update_name(id, name.clone()).await {
            Ok(server) => {
                tracing::info!("Renamed server {} to {}", id, server.name);
                Ok(server)
            }
            Err(err) if is_unique_violation(&err) => {
                let violation = ServerError::UniquenessViolation {
                    field: ServerField::Name,
                    value: name,
                };
                tracing::warn!("Rejected rename of server {}: {}", id, violation);
                Err(violation.into())
            }
            Err(err) => Err(not_found_or(id, err)),
        }
    }

    /// Gets the current status of a server
    ///
    /// # Returns
    /// - `Ok(ServerStatus)` - The stored status
    /// - `Err(AppError::ServerErr(NotFound))` - No server with this ID
    pub async fn get_status(&self, id: i64) -> Result<ServerStatus, AppError> {
        let server = self.get_or_not_found(id).await?;

        Ok(server.status)
    }

    /// Marks a server RUNNING; starting a running server is a no-op write
    pub async fn start(&self, id: i64) -> Result<Server, AppError> {
        self.set_status(id, ServerStatus::Running).await
    }

    /// Marks a server STOPPED; stopping a stopped server is a no-op write
    pub async fn stop(&self, id: i64) -> Result<Server, AppError> {
        self.set_status(id, ServerStatus::Stopped).await
    }

    /// Deletes a server permanently, only when it is STOPPED
    ///
    /// # Returns
    /// - `Ok(())` - The server was removed
    /// - `Err(AppError::ServerErr(NotFound))` - No server with this ID
    /// - `Err(AppError::ServerErr(InvalidState))` - The server is running; nothing changed
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = ServerRepository::new(self.db);

        let server = self.get_or_not_found(id).await?;
        if server.status == ServerStatus::Running {
            tracing::warn!("Refused to delete running server {}", id);
            return Err(ServerError::InvalidState { id }.into());
        }

        if repo.delete_if_stopped(id).await? == 0 {
            // The row changed between the read and the delete.
            return match repo.find_by_id(id).await? {
                Some(_) => Err(ServerError::InvalidState { id }.into()),
                None => Err(ServerError::NotFound { id }.into()),
            };
        }

        tracing::info!("Deleted server {}", id);

        Ok(())
    }

    async fn set_status(&self, id: i64, status: ServerStatus) -> Result<Server, AppError> {
        let server = ServerRepository::new(self.db)
            .update_status(id, status)
            .await
            .map_err(|err| not_found_or(id, err))?;

        tracing::info!("Server {} is now {:?}", id, server.status);

        Ok(server)
    }

    async fn get_or_not_found(&self, id: i64) -> Result<Server, AppError> {
        ServerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServerError::NotFound { id }.into())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Maps the repository's missing-row errors to `NotFound`, passing anything else through.
fn not_found_or(id: i64, err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ServerError::NotFound { id }.into(),
        err => err.into(),
    }
}

#[cfg(test)]
mod test;
