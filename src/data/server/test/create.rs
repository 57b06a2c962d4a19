use super::*;

/// Tests creating a new server.
///
/// Verifies that the repository inserts the row with the requested status and returns
/// the generated ID.
///
/// Expected: Ok with server created
#[tokio::test]
async fn creates_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let server = repo
        .create(
            CreateServerParam {
                name: "Web Server 1".to_string(),
                address: "192.168.1.10".to_string(),
            },
            ServerStatus::Stopped,
        )
        .await?;

    assert!(server.id > 0);
    assert_eq!(server.name, "Web Server 1");
    assert_eq!(server.address, "192.168.1.10");
    assert_eq!(server.status, ServerStatus::Stopped);

    // Verify server exists in database
    let db_server = ServerEntity::find_by_id(server.id).one(db).await?;
    assert!(db_server.is_some());
    assert_eq!(
        db_server.unwrap().status,
        entity::server::ServerStatus::Stopped
    );

    Ok(())
}

/// Tests that the repository persists whatever status it is given.
///
/// Forcing new servers to STOPPED is a service rule, not a store rule.
///
/// Expected: Ok with RUNNING persisted
#[tokio::test]
async fn persists_requested_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let server = repo
        .create(
            CreateServerParam {
                name: "Batch Host".to_string(),
                address: "10.0.0.5".to_string(),
            },
            ServerStatus::Running,
        )
        .await?;

    assert_eq!(server.status, ServerStatus::Running);

    Ok(())
}

/// Tests creating a server with a name already in use.
///
/// Expected: Err with unique constraint violation, no row inserted
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let result = repo
        .create(
            CreateServerParam {
                name: existing.name.clone(),
                address: "10.200.0.1".to_string(),
            },
            ServerStatus::Stopped,
        )
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(ServerEntity::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a server with an address already in use.
///
/// Expected: Err with unique constraint violation, no row inserted
#[tokio::test]
async fn fails_for_duplicate_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let result = repo
        .create(
            CreateServerParam {
                name: "Fresh Name".to_string(),
                address: existing.address.clone(),
            },
            ServerStatus::Stopped,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(ServerEntity::find().count(db).await?, 1);

    Ok(())
}
