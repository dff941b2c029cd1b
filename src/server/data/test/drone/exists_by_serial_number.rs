use super::*;

/// Tests serial number lookup for a registered drone.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_registered_serial_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::DroneFactory::new(db)
        .serial_number("DRN-001")
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    assert!(repo.exists_by_serial_number(&drone.serial_number).await?);

    Ok(())
}

/// Tests serial number lookup when no drone uses it.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_serial_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(!repo.exists_by_serial_number("DRN-404").await?);

    Ok(())
}

/// Tests the combined id and serial number lookup.
///
/// Verifies that both values must belong to the same drone.
///
/// Expected: true only for the matching pair
#[tokio::test]
async fn requires_matching_id_and_serial_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_drone(db).await?;
    let second = factory::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    assert!(
        repo.exists_by_serial_number_and_id(&first.serial_number, first.id)
            .await?
    );
    assert!(
        !repo
            .exists_by_serial_number_and_id(&first.serial_number, second.id)
            .await?
    );
    assert!(
        !repo
            .exists_by_serial_number_and_id(&second.serial_number, second.id + 100)
            .await?
    );

    Ok(())
}
