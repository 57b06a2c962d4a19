//! HTTP request handlers.
//!
//! Controllers extract request data, validate it at the boundary, convert DTOs into
//! domain parameters, call the service and convert the result back into DTOs. Each
//! handler carries a `utoipa::path` annotation so the OpenAPI document is generated
//! from the same code that serves the route.

pub mod extract;
pub mod server;
