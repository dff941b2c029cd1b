use super::*;

/// Tests listing every drone with its medications.
///
/// Expected: Ok with drones ordered by id and medications attached
#[tokio::test]
async fn lists_drones_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let empty = factory::create_drone(db).await?;
    let (loaded, medication) = factory::helpers::create_loaded_drone(db, 250.0, 250.0).await?;

    let repo = DroneRepository::new(db);
    let drones = repo.find_all().await?;

    assert_eq!(drones.len(), 2);
    assert_eq!(drones[0].id, empty.id);
    assert!(drones[0].medications.is_empty());
    assert_eq!(drones[1].id, loaded.id);
    assert_eq!(drones[1].medications[0].id, medication.id);
    assert!(!drones[1].is_available());

    Ok(())
}

/// Tests listing with no registered drones.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_drones() -> Result<(), AppError> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
