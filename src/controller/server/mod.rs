use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    controller::extract::ServerId,
    domain::server::{require_non_blank, CreateServerParam},
    error::{server::ServerField, AppError},
    model::{
        api::ErrorDto,
        server::{CreateServerDto, ServerDto, ServerStatusResponseDto},
    },
    service::server::ServerService,
    state::AppState,
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RenameParams {
    /// New server name
    #[serde(default)]
    pub name: String,
}

/// List all servers.
///
/// # Returns
/// - `200 OK` - Every server in the registry
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved servers", body = Vec<ServerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let servers = ServerService::new(&state.db).list().await?;

    let dtos: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new server.
///
/// The server always starts in the STOPPED state; a `status` in the body is ignored.
///
/// # Returns
/// - `201 Created` - Successfully created server
/// - `400 Bad Request` - Blank name/address, or name/address already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/servers",
    tag = SERVER_TAG,
    request_body = CreateServerDto,
    responses(
        (status = 201, description = "Successfully created server", body = ServerDto),
        (status = 400, description = "Invalid or duplicate server data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_server(
    State(state): State<AppState>,
    payload: Result<Json<CreateServerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateServerParam::from_dto(payload)?;

    let server = ServerService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Rename a server.
///
/// # Returns
/// - `200 OK` - Successfully renamed server
/// - `400 Bad Request` - Blank name or name already in use
/// - `404 Not Found` - Server not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/servers/{id}/rename",
    tag = SERVER_TAG,
    params(
        ("id" = i64, Path, description = "Server ID"),
        RenameParams
    ),
    responses(
        (status = 200, description = "Successfully renamed server", body = ServerDto),
        (status = 400, description = "Invalid or duplicate server name", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_server(
    State(state): State<AppState>,
    ServerId(id): ServerId,
    params: Result<Query<RenameParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    require_non_blank(ServerField::Name, &params.name)?;

    let server = ServerService::new(&state.db)
        .rename(id, params.name)
        .await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Get the status of a server.
///
/// # Returns
/// - `200 OK` - Current status
/// - `404 Not Found` - Server not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers/{id}/status",
    tag = SERVER_TAG,
    params(
        ("id" = i64, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved server status", body = ServerStatusResponseDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_status(
    State(state): State<AppState>,
    ServerId(id): ServerId,
) -> Result<impl IntoResponse, AppError> {
    let status = ServerService::new(&state.db).get_status(id).await?;

    Ok((StatusCode::OK, Json(status.into_response_dto())))
}

#[utoipa::path(
    put,
    path = "/api/servers/{id}/start",
    tag = SERVER_TAG,
    params(
        ("id" = i64, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Server status set to RUNNING", body = ServerDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_server(
    State(state): State<AppState>,
    ServerId(id): ServerId,
) -> Result<impl IntoResponse, AppError> {
    let server = ServerService::new(&state.db).start(id).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/servers/{id}/stop",
    tag = SERVER_TAG,
    params(
        ("id" = i64, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "Server status set to STOPPED", body = ServerDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop_server(
    State(state): State<AppState>,
    ServerId(id): ServerId,
) -> Result<impl IntoResponse, AppError> {
    let server = ServerService::new(&state.db).stop(id).await?;

    Ok((StatusCode::OK, Json(server.into_dto())))
}

/// Delete a server.
///
/// Only stopped servers can be deleted.
///
/// # Returns
/// - `204 No Content` - Successfully deleted server
/// - `404 Not Found` - Server not found
/// - `409 Conflict` - Server is running
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/servers/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = i64, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted server"),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 409, description = "Server is running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    ServerId(id): ServerId,
) -> Result<impl IntoResponse, AppError> {
    ServerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test;
