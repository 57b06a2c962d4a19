use super::*;

/// Tests reading the status of a stopped server.
///
/// Expected: Ok(Stopped)
#[tokio::test]
async fn gets_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_server(db).await?;

    let status = ServerService::new(db).get_status(created.id).await?;

    assert_eq!(status, ServerStatus::Stopped);

    Ok(())
}

/// Tests starting then stopping a server.
///
/// Expected: Ok with status following each transition
#[tokio::test]
async fn starts_and_stops_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_server(db).await?;
    let service = ServerService::new(db);

    let started = service.start(created.id).await?;
    assert_eq!(started.status, ServerStatus::Running);
    assert_eq!(service.get_status(created.id).await?, ServerStatus::Running);

    let stopped = service.stop(created.id).await?;
    assert_eq!(stopped.status, ServerStatus::Stopped);
    assert_eq!(service.get_status(created.id).await?, ServerStatus::Stopped);

    Ok(())
}

/// Tests starting a server twice.
///
/// Expected: Ok both times, status remains RUNNING
#[tokio::test]
async fn start_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_server(db).await?;
    let service = ServerService::new(db);

    service.start(created.id).await?;
    let again = service.start(created.id).await?;

    assert_eq!(again.status, ServerStatus::Running);
    assert_eq!(service.get_status(created.id).await?, ServerStatus::Running);

    Ok(())
}

/// Tests stopping a server that is already stopped.
///
/// Expected: Ok, status remains STOPPED
#[tokio::test]
async fn stop_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_server(db).await?;

    let server = ServerService::new(db).stop(created.id).await?;

    assert_eq!(server.status, ServerStatus::Stopped);

    Ok(())
}

/// Tests every status operation against an ID that does not exist.
///
/// Expected: Err(NotFound) from get_status, start and stop
#[tokio::test]
async fn fails_for_missing_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerService::new(db);

    assert!(matches!(
        service.get_status(42).await,
        Err(AppError::ServerErr(ServerError::NotFound { id: 42 }))
    ));
    assert!(matches!(
        service.start(42).await,
        Err(AppError::ServerErr(ServerError::NotFound { id: 42 }))
    ));
    assert!(matches!(
        service.stop(42).await,
        Err(AppError::ServerErr(ServerError::NotFound { id: 42 }))
    ));

    Ok(())
}
