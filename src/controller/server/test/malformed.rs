use super::*;

/// Tests an ID larger than any 32-bit integer.
///
/// Expected: 404 with `ErrorDto` from status and start
#[tokio::test]
async fn large_id_is_not_found() {
    let (_test, server) = setup().await;

    let response = server.get("/api/servers/3000000000/status").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let error: ErrorDto = response.json();
    assert_eq!(error.error, "Server not found with id: 3000000000");

    server
        .put("/api/servers/3000000000/start")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Tests an ID that is not a number.
///
/// Expected: 400 with `ErrorDto` body
#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let (_test, server) = setup().await;

    let response = server.get("/api/servers/abc/status").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorDto = response.json();
    assert!(!error.error.is_empty());
}

/// Tests creating a server from a non-JSON body.
///
/// Expected: 415 with `ErrorDto` body
#[tokio::test]
async fn non_json_body_is_rejected() {
    let (_test, server) = setup().await;

    let response = server.post("/api/servers").text("Web Server 1").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let error: ErrorDto = response.json();
    assert!(!error.error.is_empty());
}

/// Tests creating a server with a field of the wrong type.
///
/// Expected: 422 with `ErrorDto` body, nothing created
#[tokio::test]
async fn mistyped_field_is_rejected() {
    let (_test, server) = setup().await;

    let response = server
        .post("/api/servers")
        .json(&json!({ "name": 5, "address": "192.168.1.10" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = response.json();
    assert!(!error.error.is_empty());

    server.get("/api/servers").await.assert_json(&json!([]));
}
