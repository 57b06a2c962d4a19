use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller::server::*, state::AppState};

/// Path the generated OpenAPI document is served from
pub static OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Management API",
        version = "1.0.0",
        description = "REST API for managing servers. Provides endpoints to create, list, rename, start, stop, and delete servers."
    ),
    tags(
        (name = "server", description = "API for managing servers")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_servers, create_server))
        .routes(routes!(delete_server))
        .routes(routes!(rename_server))
        .routes(routes!(get_server_status))
        .routes(routes!(start_server))
        .routes(routes!(stop_server))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, api))
}
