use super::*;

/// Tests deleting a stopped server.
///
/// Expected: Ok(1) with row removed
#[tokio::test]
async fn deletes_stopped_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let deleted = repo.delete_if_stopped(server.id).await?;

    assert_eq!(deleted, 1);

    // Verify server is deleted
    let check = ServerEntity::find_by_id(server.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that a running server is left in place.
///
/// Expected: Ok(0) with row still present
#[tokio::test]
async fn keeps_running_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_running_server(db).await?;

    let repo = ServerRepository::new(db);
    let deleted = repo.delete_if_stopped(server.id).await?;

    assert_eq!(deleted, 0);

    let check = ServerEntity::find_by_id(server.id).one(db).await?;
    assert!(check.is_some());

    Ok(())
}

/// Tests deleting a server that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let deleted = repo.delete_if_stopped(999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that deleting one server leaves the others untouched.
///
/// Expected: Ok(1) with the remaining server still present
#[tokio::test]
async fn deletes_only_target_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;

    let repo = ServerRepository::new(db);
    repo.delete_if_stopped(target.id).await?;

    assert!(ServerEntity::find_by_id(other.id).one(db).await?.is_some());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
