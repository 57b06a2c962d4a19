//! Domain & parameter models for server operations
//!
//! Defines the server domain model, its lifecycle status, the creation parameters,
//! and the conversions from entity models and into DTOs.

use crate::{
    error::server::{ServerError, ServerField},
    model::server::{CreateServerDto, ServerDto, ServerStatusDto, ServerStatusResponseDto},
};

/// Lifecycle flag of a server record.
///
/// Transitions in both directions are always permitted; only deletion requires
/// `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Running,
    Stopped,
}

impl ServerStatus {
    pub fn from_entity(status: entity::server::ServerStatus) -> Self {
        match status {
            entity::server::ServerStatus::Running => Self::Running,
            entity::server::ServerStatus::Stopped => Self::Stopped,
        }
    }

    pub fn into_entity(self) -> entity::server::ServerStatus {
        match self {
            Self::Running => entity::server::ServerStatus::Running,
            Self::Stopped => entity::server::ServerStatus::Stopped,
        }
    }

    pub fn into_dto(self) -> ServerStatusDto {
        match self {
            Self::Running => ServerStatusDto::Running,
            Self::Stopped => ServerStatusDto::Stopped,
        }
    }

    /// Wraps the status in the body returned by the status endpoint.
    pub fn into_response_dto(self) -> ServerStatusResponseDto {
        ServerStatusResponseDto {
            status: self.into_dto(),
        }
    }
}

/// The server domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub status: ServerStatus,
}

impl Server {
    /// Converts an entity model to the server domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Server` - The converted domain model
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            status: ServerStatus::from_entity(entity.status),
        }
    }

    /// Converts the domain model into the DTO returned by the API.
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            address: self.address,
            status: self.status.into_dto(),
        }
    }
}

/// Parameters for creating a new server
///
/// Only carries the caller-controlled fields; the initial status is decided by the
/// service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateServerParam {
    pub name: String,
    pub address: String,
}

impl CreateServerParam {
    /// Validates a create request and converts it into parameters
    ///
    /// Any status supplied in the request is dropped here.
    ///
    /// # Arguments
    /// - `dto` - Request body received by the controller
    ///
    /// # Returns
    /// - `Ok(CreateServerParam)` - Name and address are both non-blank
    /// - `Err(ServerError::Validation)` - Name or address is empty or whitespace
    pub fn from_dto(dto: CreateServerDto) -> Result<Self, ServerError> {
        require_non_blank(ServerField::Name, &dto.name)?;
        require_non_blank(ServerField::Address, &dto.address)?;

        Ok(Self {
            name: dto.name,
            address: dto.address,
        })
    }
}

/// Rejects empty or whitespace-only values for a required field.
///
/// # Returns
/// - `Ok(())` - Value contains at least one non-whitespace character
/// - `Err(ServerError::Validation)` - Value is blank
pub fn require_non_blank(field: ServerField, value: &str) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::Validation { field });
    }

    Ok(())
}
