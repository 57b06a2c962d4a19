mod malformed;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerStatusDto, ServerStatusResponseDto},
    },
    router::router,
    state::AppState,
};

/// Builds an in-memory registry and a test server routing into it.
///
/// The context is returned so the database outlives the server.
async fn setup() -> (TestContext, TestServer) {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let server = TestServer::builder()
        .build(router().with_state(AppState::new(db)))
        .unwrap();

    (test, server)
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}
